//! Plot polygons and their day-indexed analytics.

use crate::geometry::{self, GeoPoint, MultiPolygon};

/// A farmer-owned land parcel.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotFeature {
    /// Unique, stable identifier.
    pub plot_id: String,
    /// Crop grown on the plot.
    pub crop_type: String,
    /// Soil classification.
    pub soil_type: String,
    /// Plot size in hectares.
    pub area_hectares: f64,
    /// Owner of the plot.
    pub farmer_name: String,
    /// Plot outline; several parts for multi-polygons.
    pub outline: MultiPolygon,
}

impl PlotFeature {
    /// Whether the point falls on the plot.
    ///
    /// Parts are tested one by one, so an edge shared by two parts still
    /// belongs to the plot.
    pub fn contains(&self, point: GeoPoint) -> bool {
        self.outline.0.iter().any(|part| geometry::covers(part, point))
    }

    /// Area-weighted centroid over all parts of the plot.
    pub fn centroid(&self) -> Option<GeoPoint> {
        geometry::centroid(&self.outline)
    }
}

/// Analytics of one plot for one day.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlotDay {
    /// Date stamp as found in the dataset.
    pub date: String,
    /// Measured precipitation in mm.
    pub rainfall: Option<f64>,
    /// Available soil water in mm.
    pub moisture: Option<f64>,
    /// Desired soil water in mm.
    pub desired_moisture: Option<f64>,
    /// Evapotranspiration in mm.
    pub evapotranspiration: Option<f64>,
    /// Irrigation deficit in mm.
    pub deficit: Option<f64>,
}
