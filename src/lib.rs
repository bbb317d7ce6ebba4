//! Growflow - irrigation monitoring for farm plots and raster pixels.
//!
//! Growflow loads a farm's published monitoring data (soil moisture, rainfall,
//! evapotranspiration and irrigation deficit) and lets it be explored either
//! by vector plot or by grid pixel.
//!
//! # Features
//!
//! - Grid geometry between a bounding box and pixel indices
//! - PNG heatmap overlays as embeddable data URIs
//! - Route and click resolution into a validated selection
//! - Day series per selection with user-entered sprinkling merged in
//! - Terminal front end with clipboard export
//!
//! # Example
//!
//! ```ignore
//! use growflow::analytics::project;
//! use growflow::data::DataReader;
//! use growflow::overrides::SprinklingOverrides;
//! use growflow::selection::Route;
//! use std::path::Path;
//!
//! let data = DataReader::read_file(Path::new("farm.json"))?;
//! let (date, selection) = Route::parse("/map/2024-06-01/pixel/3-4").settle(&data);
//! let series = project(&data, &selection, &SprinklingOverrides::new());
//! println!("{} days for {}", series.len(), date);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod analytics;
pub mod app;
pub mod clipboard;
pub mod data;
pub mod edit;
pub mod error;
pub mod geometry;
pub mod overrides;
pub mod raster;
pub mod selection;
pub mod ui;
pub mod util;

pub use error::{GrowflowError, Result};
