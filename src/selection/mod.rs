//! Selection resolution.
//!
//! Turning user input into a selection happens in two stages. [`resolve`]
//! is purely syntactic and only fails on malformed input. [`validate`]
//! checks the result against a loaded dataset and fails with `NotFound`
//! when the plot or pixel does not exist.

mod route;

pub use route::{Route, RouteOutcome};

use std::fmt;

use crate::data::{FarmData, PlotFeature};
use crate::error::{GrowflowError, Result};
use crate::geometry::{GeoPoint, PixelIndex};

/// What the user is looking at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// Nothing selected; the overall summary is shown.
    #[default]
    None,
    /// A vector plot by id.
    Plot(String),
    /// A raster cell.
    Pixel(PixelIndex),
}

impl Selection {
    /// Route segment naming the selection kind.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Selection::None => None,
            Selection::Plot(_) => Some("plot"),
            Selection::Pixel(_) => Some("pixel"),
        }
    }

    /// Route segment identifying the selected entity.
    pub fn id(&self) -> Option<String> {
        match self {
            Selection::None => None,
            Selection::Plot(id) => Some(id.clone()),
            Selection::Pixel(index) => Some(index.to_string()),
        }
    }

    /// Whether nothing is selected.
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::None => f.write_str("none"),
            Selection::Plot(id) => write!(f, "plot {}", id),
            Selection::Pixel(index) => write!(f, "pixel {}", index),
        }
    }
}

/// A selection known to refer to existing data.
///
/// Only [`validate`] builds one, so holders can index the dataset without
/// further checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidSelection(Selection);

impl ValidSelection {
    /// The empty selection, always valid.
    pub fn none() -> Self {
        Self(Selection::None)
    }

    /// The validated selection.
    pub fn selection(&self) -> &Selection {
        &self.0
    }

    /// Unwrap into the plain selection.
    pub fn into_inner(self) -> Selection {
        self.0
    }
}

/// Resolve the raw selection type and id into a [`Selection`].
///
/// No id means no selection, whatever the type says. Plot ids are taken as
/// given; pixel ids must read `row-col` with two non-negative integers.
pub fn resolve(selection_type: Option<&str>, selection_id: Option<&str>) -> Result<Selection> {
    let Some(id) = selection_id else {
        return Ok(Selection::None);
    };

    match selection_type {
        Some("plot") => Ok(Selection::Plot(id.to_string())),
        Some("pixel") => parse_pixel_id(id).map(Selection::Pixel),
        Some(other) => Err(GrowflowError::invalid_selection(format!(
            "unknown selection type '{}'",
            other
        ))),
        None => Err(GrowflowError::invalid_selection(format!(
            "selection id '{}' without a type",
            id
        ))),
    }
}

fn parse_pixel_id(id: &str) -> Result<PixelIndex> {
    let invalid = || GrowflowError::invalid_selection(format!("malformed pixel id '{}'", id));

    let mut tokens = id.split('-');
    let (Some(row), Some(col), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(invalid());
    };
    let parse = |token: &str| -> Result<usize> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        token.parse().map_err(|_| invalid())
    };

    Ok(PixelIndex::new(parse(row)?, parse(col)?))
}

/// Check a resolved selection against the dataset.
///
/// A plot must exist and carry analytics; a pixel must lie inside the grid.
pub fn validate(selection: Selection, data: &FarmData) -> Result<ValidSelection> {
    match &selection {
        Selection::None => {}
        Selection::Plot(id) => {
            if data.plot(id).is_none() {
                return Err(GrowflowError::not_found(format!("plot {}", id)));
            }
            if data.plot_days(id).is_none() {
                return Err(GrowflowError::not_found(format!("analytics for plot {}", id)));
            }
        }
        Selection::Pixel(index) => {
            if !data.grid.contains_index(*index) {
                return Err(GrowflowError::not_found(format!("pixel {}", index)));
            }
        }
    }
    Ok(ValidSelection(selection))
}

/// Map position to focus for a selection.
///
/// Plots center on the area centroid of their outline, pixels on their
/// grid position. `None` when nothing is selected or the entity is unknown.
pub fn center_of(selection: &Selection, data: &FarmData) -> Option<GeoPoint> {
    match selection {
        Selection::None => None,
        Selection::Plot(id) => data.plot(id)?.centroid(),
        Selection::Pixel(index) => data.grid.pixel_center(*index).ok(),
    }
}

/// The plot under a map position, if any.
pub fn plot_at(data: &FarmData, point: GeoPoint) -> Option<&PlotFeature> {
    data.plot_at(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pixel_id_tokens() {
        assert_eq!(parse_pixel_id("12-3").unwrap(), PixelIndex::new(12, 3));
        assert_eq!(parse_pixel_id("007-0").unwrap(), PixelIndex::new(7, 0));
        for bad in ["", "1", "1-", "-1", "1-2-3", "a-b", "+1-2", "1- 2", "-1-2"] {
            assert!(parse_pixel_id(bad).is_err(), "accepted {:?}", bad);
        }
    }
}
