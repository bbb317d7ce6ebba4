//! Per-day pixel layers and categorical grids.

use ndarray::Array2;
use std::fmt;
use std::str::FromStr;

use crate::geometry::PixelIndex;

/// Land-use classes in the order their integer codes refer to.
pub const LAND_USE_LABELS: [&str; 19] = [
    "gras",
    "mais",
    "aardappelen",
    "bieten",
    "granen",
    "overige landbouwgew",
    "boomteelt",
    "glastuinbouw",
    "boomgaard",
    "bollen",
    "loofbos",
    "naaldbos",
    "natte natuur",
    "droge natuur",
    "kale grond",
    "zoet water",
    "zout water",
    "stedelijk bebouwd",
    "donker naaldbos",
];

/// Analytics layer carried by every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    /// Shortfall between desired and available soil water.
    #[default]
    Deficit,
    /// Measured precipitation.
    Rainfall,
    /// Available soil water.
    Moisture,
    /// Desired soil water.
    DesiredMoisture,
    /// Evapotranspiration.
    Evapotranspiration,
}

impl Metric {
    /// All metrics in display order.
    pub const ALL: [Metric; 5] = [
        Metric::Deficit,
        Metric::Rainfall,
        Metric::Moisture,
        Metric::DesiredMoisture,
        Metric::Evapotranspiration,
    ];

    /// Get the next metric in cycle.
    pub fn next(self) -> Self {
        match self {
            Metric::Deficit => Metric::Rainfall,
            Metric::Rainfall => Metric::Moisture,
            Metric::Moisture => Metric::DesiredMoisture,
            Metric::DesiredMoisture => Metric::Evapotranspiration,
            Metric::Evapotranspiration => Metric::Deficit,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Metric::Deficit => "Deficit",
            Metric::Rainfall => "Rainfall",
            Metric::Moisture => "Soil moisture",
            Metric::DesiredMoisture => "Desired moisture",
            Metric::Evapotranspiration => "Evapotranspiration",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses the dataset key or a short command-line name.
impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deficit" => Ok(Metric::Deficit),
            "rainfall" | "measuredprecipitation" => Ok(Metric::Rainfall),
            "moisture" | "availablesoilwater" => Ok(Metric::Moisture),
            "desired-moisture" | "desiredsoilwater" => Ok(Metric::DesiredMoisture),
            "evapotranspiration" | "et" => Ok(Metric::Evapotranspiration),
            other => Err(format!("unknown metric '{}'", other)),
        }
    }
}

/// All pixel layers for one day. Absent cells hold `NaN`.
#[derive(Debug, Clone)]
pub struct PixelDay {
    /// Time stamp as found in the dataset.
    pub time: String,
    /// Irrigation deficit in mm.
    pub deficit: Array2<f64>,
    /// Rainfall in mm.
    pub rainfall: Array2<f64>,
    /// Available soil water in mm.
    pub moisture: Array2<f64>,
    /// Desired soil water in mm.
    pub desired_moisture: Array2<f64>,
    /// Evapotranspiration in mm.
    pub evapotranspiration: Array2<f64>,
}

impl PixelDay {
    /// The `height x width` array for a metric.
    pub fn layer(&self, metric: Metric) -> &Array2<f64> {
        match metric {
            Metric::Deficit => &self.deficit,
            Metric::Rainfall => &self.rainfall,
            Metric::Moisture => &self.moisture,
            Metric::DesiredMoisture => &self.desired_moisture,
            Metric::Evapotranspiration => &self.evapotranspiration,
        }
    }

    /// Value of a metric at a pixel, `None` when absent or out of range.
    pub fn value(&self, metric: Metric, index: PixelIndex) -> Option<f64> {
        self.layer(metric)
            .get([index.row, index.col])
            .copied()
            .filter(|v| v.is_finite())
    }
}

/// One cell of a land-use or soil grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CategoryCell {
    /// Integer class code.
    Code(i64),
    /// Free-form label.
    Label(String),
    /// No data.
    #[default]
    Missing,
}

impl CategoryCell {
    /// Label for a land-use cell; codes resolve through [`LAND_USE_LABELS`].
    pub fn land_use_label(&self) -> Option<String> {
        match self {
            CategoryCell::Code(code) => Some(
                usize::try_from(*code)
                    .ok()
                    .and_then(|i| LAND_USE_LABELS.get(i))
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| code.to_string()),
            ),
            other => other.label(),
        }
    }

    /// Plain label: the text itself or the code as a number.
    pub fn label(&self) -> Option<String> {
        match self {
            CategoryCell::Code(code) => Some(code.to_string()),
            CategoryCell::Label(text) => Some(text.clone()),
            CategoryCell::Missing => None,
        }
    }
}
