//! Error types for Growflow.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! Clicks outside the grid are not errors: `Grid::resolve_click` returns `None`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Growflow operations.
pub type Result<T> = std::result::Result<T, GrowflowError>;

/// Errors that can occur in Growflow.
#[derive(Debug, Error)]
pub enum GrowflowError {
    /// Malformed selection input (unknown selection type, bad pixel id).
    #[error("Invalid selection: {input}")]
    InvalidSelection { input: String },

    /// Well-formed selection referencing a plot or pixel that does not exist.
    #[error("Not found: {what}")]
    NotFound { what: String },

    /// Bounding box or dimensions with zero extent.
    #[error("Degenerate grid: {reason}")]
    DegenerateGrid { reason: String },

    /// Pixel index outside the grid.
    #[error("Pixel index ({row}, {col}) out of range for {height}x{width} grid")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// Dataset content that does not fit the expected shape.
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    /// Color scale with an unusable domain or color.
    #[error("Invalid color scale: {0}")]
    InvalidColorScale(String),

    /// Rasterizing a matrix without rows or columns.
    #[error("Cannot rasterize an empty matrix")]
    EmptyRaster,

    /// A sprinkling edit is already waiting for an answer.
    #[error("Another sprinkling edit is still open")]
    EditInProgress,

    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to encode the overlay image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GrowflowError {
    /// Create an InvalidSelection error.
    pub fn invalid_selection(input: impl Into<String>) -> Self {
        Self::InvalidSelection {
            input: input.into(),
        }
    }

    /// Create a NotFound error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Create a DegenerateGrid error.
    pub fn degenerate_grid(reason: impl Into<String>) -> Self {
        Self::DegenerateGrid {
            reason: reason.into(),
        }
    }

    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create an InvalidDataset error.
    pub fn invalid_dataset(message: impl Into<String>) -> Self {
        Self::InvalidDataset(message.into())
    }

    /// Whether the user can recover by falling back to the unselected view.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidSelection { .. } | Self::NotFound { .. } | Self::EditInProgress
        )
    }
}
