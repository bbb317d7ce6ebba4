//! Utility functions.
//!
//! Terminal color mapping and layout constants shared by the views.

pub mod colormaps;
pub mod layout_config;

pub use layout_config::LayoutConfig;
