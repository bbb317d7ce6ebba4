//! Dataset model and loading.
//!
//! This module handles reading farm datasets from JSON and representing them
//! as a pixel grid with per-day layers plus a set of plot polygons.

mod dataset;
mod pixels;
mod plots;
mod reader;

pub use dataset::FarmData;
pub use pixels::{CategoryCell, Metric, PixelDay, LAND_USE_LABELS};
pub use plots::{PlotDay, PlotFeature};
pub use reader::DataReader;
