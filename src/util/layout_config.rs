//! Layout configuration constants for the terminal views.

/// Configuration for the map view.
#[derive(Debug, Clone)]
pub struct MapLayoutConfig {
    /// Terminal characters per pixel horizontally (for aspect ratio correction).
    pub cell_width: usize,
    /// Number of color samples in the legend.
    pub legend_steps: usize,
    /// Share of the screen width given to the map, in percent.
    pub width_percent: u16,
}

impl Default for MapLayoutConfig {
    fn default() -> Self {
        Self {
            cell_width: 2,
            legend_steps: 24,
            width_percent: 55,
        }
    }
}

/// Configuration for the series chart.
#[derive(Debug, Clone)]
pub struct ChartLayoutConfig {
    /// Padding factor for Y-axis (0.1 = 10% margin).
    pub y_axis_padding_factor: f64,
    /// Minimum chart height in rows.
    pub min_height: u16,
}

impl Default for ChartLayoutConfig {
    fn default() -> Self {
        Self {
            y_axis_padding_factor: 0.1,
            min_height: 8,
        }
    }
}

/// Configuration for the plot table.
#[derive(Debug, Clone)]
pub struct TableLayoutConfig {
    /// Widest a text column may grow, in characters.
    pub max_column_width: u16,
    /// Width of numeric columns.
    pub number_width: u16,
    /// Gap between columns.
    pub column_spacing: u16,
}

impl Default for TableLayoutConfig {
    fn default() -> Self {
        Self {
            max_column_width: 18,
            number_width: 9,
            column_spacing: 1,
        }
    }
}

/// Combined layout configuration for all views.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Configuration for the map.
    pub map: MapLayoutConfig,
    /// Configuration for the series chart.
    pub chart: ChartLayoutConfig,
    /// Configuration for the plot table.
    pub table: TableLayoutConfig,
}
