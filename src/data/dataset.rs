//! Loaded farm dataset.

use std::collections::HashMap;

use ndarray::Array2;

use super::{CategoryCell, PixelDay, PlotDay, PlotFeature};
use crate::analytics::format_day;
use crate::geometry::{GeoPoint, Grid, PixelIndex};

/// Everything loaded for one farm and one date. Immutable after loading.
#[derive(Debug, Clone)]
pub struct FarmData {
    /// The single date this dataset was published for.
    pub default_date: String,
    /// Geometry of the pixel grid.
    pub grid: Grid,
    /// Pixel layers, one entry per day in stored order.
    pub pixel_days: Vec<PixelDay>,
    /// Land-use class per pixel, if published.
    pub land_use: Option<Array2<CategoryCell>>,
    /// Soil class per pixel, if published.
    pub soil_map: Option<Array2<CategoryCell>>,
    /// Plot polygons.
    pub plots: Vec<PlotFeature>,
    /// Day-indexed analytics per plot id.
    pub plot_analytics: HashMap<String, Vec<PlotDay>>,
}

impl FarmData {
    /// Whether navigation to `date` can be served by this dataset.
    pub fn is_date_loaded(&self, date: &str) -> bool {
        date == self.default_date
    }

    /// Look up a plot by id.
    pub fn plot(&self, plot_id: &str) -> Option<&PlotFeature> {
        self.plots.iter().find(|p| p.plot_id == plot_id)
    }

    /// Day-indexed analytics of a plot.
    pub fn plot_days(&self, plot_id: &str) -> Option<&[PlotDay]> {
        self.plot_analytics.get(plot_id).map(Vec::as_slice)
    }

    /// The first plot whose outline covers `point`.
    pub fn plot_at(&self, point: GeoPoint) -> Option<&PlotFeature> {
        self.plots.iter().find(|p| p.contains(point))
    }

    /// Position of the pixel day matching `date` at day precision.
    pub fn pixel_day_index(&self, date: &str) -> Option<usize> {
        let wanted = format_day(date);
        self.pixel_days
            .iter()
            .position(|d| format_day(&d.time) == wanted)
    }

    /// Pixel layers for `date` at day precision.
    pub fn pixel_day(&self, date: &str) -> Option<&PixelDay> {
        self.pixel_day_index(date).map(|i| &self.pixel_days[i])
    }

    /// Land-use label of a pixel.
    pub fn land_use_at(&self, index: PixelIndex) -> Option<String> {
        self.land_use
            .as_ref()?
            .get([index.row, index.col])?
            .land_use_label()
    }

    /// Soil label of a pixel.
    pub fn soil_at(&self, index: PixelIndex) -> Option<String> {
        self.soil_map.as_ref()?.get([index.row, index.col])?.label()
    }
}
