//! Grid geometry over a geographic bounding box.
//!
//! A [`Grid`] splits a bounding box into `height` latitude rows and `width`
//! longitude columns. Row 0 is the southernmost row and column 0 the
//! westernmost column, so a [`PixelIndex`] grows with latitude and longitude.
//!
//! Pixel positions use the origin-corner convention: the point reported for
//! a pixel is its south-west corner, `start + index * step`. Click resolution
//! is the exact inverse (`floor((value - start) / step)`), so a pixel's
//! reported position always resolves back to the same pixel.

mod polygon;

pub use geo_types::{MultiPolygon, Polygon};
pub use polygon::{centroid, covers, ring};

use crate::error::{GrowflowError, Result};
use serde::Serialize;
use std::fmt;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GeoPoint {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Normalized bounding box with `lat_start < lat_end` and `lng_start < lng_end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    /// Southern edge.
    pub lat_start: f64,
    /// Northern edge.
    pub lat_end: f64,
    /// Western edge.
    pub lng_start: f64,
    /// Eastern edge.
    pub lng_end: f64,
}

/// Sort two opposite corners into a normalized bounding box.
///
/// Each axis is sorted independently, so the corners may be given in any
/// order. An axis that collapses to zero length is a fatal configuration
/// error.
pub fn normalize_bounds(corner1: GeoPoint, corner2: GeoPoint) -> Result<Bounds> {
    let coords = [corner1.lat, corner1.lng, corner2.lat, corner2.lng];
    if coords.iter().any(|c| !c.is_finite()) {
        return Err(GrowflowError::degenerate_grid(
            "bounding box has non-finite coordinates",
        ));
    }

    let (lat_start, lat_end) = sorted(corner1.lat, corner2.lat);
    let (lng_start, lng_end) = sorted(corner1.lng, corner2.lng);

    if lat_start == lat_end {
        return Err(GrowflowError::degenerate_grid(format!(
            "latitude extent is zero ({})",
            lat_start
        )));
    }
    if lng_start == lng_end {
        return Err(GrowflowError::degenerate_grid(format!(
            "longitude extent is zero ({})",
            lng_start
        )));
    }

    Ok(Bounds {
        lat_start,
        lat_end,
        lng_start,
        lng_end,
    })
}

fn sorted(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Position of one cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelIndex {
    /// Latitude index, `0..height`.
    pub row: usize,
    /// Longitude index, `0..width`.
    pub col: usize,
}

impl PixelIndex {
    /// Create a pixel index.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Formats as `row-col`, the form used in navigation paths.
impl fmt::Display for PixelIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// A straight reference line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSegment {
    /// First end point.
    pub from: GeoPoint,
    /// Second end point.
    pub to: GeoPoint,
}

/// A uniform raster grid embedded in a bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    bounds: Bounds,
}

impl Grid {
    /// Create a grid of `width` columns and `height` rows over `bounds`.
    ///
    /// The bounds must already be normalized, as [`normalize_bounds`]
    /// produces them.
    pub fn new(width: usize, height: usize, bounds: Bounds) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GrowflowError::degenerate_grid(format!(
                "grid dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        let b = &bounds;
        let finite = [b.lat_start, b.lat_end, b.lng_start, b.lng_end]
            .iter()
            .all(|c| c.is_finite());
        if !finite || b.lat_start >= b.lat_end || b.lng_start >= b.lng_end {
            return Err(GrowflowError::degenerate_grid(format!(
                "bounds are not normalized: lat {}..{}, lng {}..{}",
                b.lat_start, b.lat_end, b.lng_start, b.lng_end
            )));
        }
        Ok(Self {
            width,
            height,
            bounds,
        })
    }

    /// Create a grid from a `[lng1, lat1, lng2, lat2]` bounding box.
    pub fn from_bounding_box(width: usize, height: usize, bbox: [f64; 4]) -> Result<Self> {
        let [lng1, lat1, lng2, lat2] = bbox;
        let bounds = normalize_bounds(GeoPoint::new(lat1, lng1), GeoPoint::new(lat2, lng2))?;
        Self::new(width, height, bounds)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Normalized bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Cell size as `(lat_step, lng_step)`.
    pub fn cell_size(&self) -> (f64, f64) {
        let b = &self.bounds;
        (
            (b.lat_end - b.lat_start) / self.height as f64,
            (b.lng_end - b.lng_start) / self.width as f64,
        )
    }

    /// Center of the bounding box, the default map view.
    pub fn center(&self) -> GeoPoint {
        let b = &self.bounds;
        GeoPoint::new(
            (b.lat_start + b.lat_end) / 2.0,
            (b.lng_start + b.lng_end) / 2.0,
        )
    }

    /// Whether the index addresses a cell of this grid.
    pub fn contains_index(&self, index: PixelIndex) -> bool {
        index.row < self.height && index.col < self.width
    }

    /// Latitudes of the horizontal grid lines, south to north.
    ///
    /// There are `height + 1` values and the last one is exactly `lat_end`.
    pub fn lat_lines(&self) -> Vec<f64> {
        let (lat_step, _) = self.cell_size();
        axis_lines(self.bounds.lat_start, self.bounds.lat_end, lat_step, self.height)
    }

    /// Longitudes of the vertical grid lines, west to east.
    pub fn lng_lines(&self) -> Vec<f64> {
        let (_, lng_step) = self.cell_size();
        axis_lines(self.bounds.lng_start, self.bounds.lng_end, lng_step, self.width)
    }

    /// Reference lines for drawing the grid over the overlay.
    ///
    /// Latitude lines come first, each spanning the full longitude range,
    /// followed by the longitude lines.
    pub fn grid_lines(&self) -> Vec<LineSegment> {
        let b = self.bounds;
        let horizontal = self.lat_lines().into_iter().map(|lat| LineSegment {
            from: GeoPoint::new(lat, b.lng_start),
            to: GeoPoint::new(lat, b.lng_end),
        });
        let vertical = self.lng_lines().into_iter().map(|lng| LineSegment {
            from: GeoPoint::new(b.lat_start, lng),
            to: GeoPoint::new(b.lat_end, lng),
        });
        horizontal.chain(vertical).collect()
    }

    /// The unit cell of a pixel as a four-corner polygon.
    ///
    /// Corners run `(lat1, lng1), (lat1, lng2), (lat2, lng2), (lat2, lng1)`
    /// and the ring is closed back to the first corner.
    pub fn pixel_polygon(&self, index: PixelIndex) -> Result<Polygon> {
        let origin = self.pixel_center(index)?;
        let (lat_step, lng_step) = self.cell_size();
        let (lat1, lng1) = (origin.lat, origin.lng);
        let (lat2, lng2) = (lat1 + lat_step, lng1 + lng_step);

        let corners = ring([
            GeoPoint::new(lat1, lng1),
            GeoPoint::new(lat1, lng2),
            GeoPoint::new(lat2, lng2),
            GeoPoint::new(lat2, lng1),
        ]);
        Ok(Polygon::new(corners, Vec::new()))
    }

    /// Representative position of a pixel: its origin (south-west) corner.
    pub fn pixel_center(&self, index: PixelIndex) -> Result<GeoPoint> {
        self.check_index(index)?;
        let (lat_step, lng_step) = self.cell_size();
        Ok(GeoPoint::new(
            self.bounds.lat_start + index.row as f64 * lat_step,
            self.bounds.lng_start + index.col as f64 * lng_step,
        ))
    }

    /// Resolve a geographic point to the pixel containing it.
    ///
    /// Returns `None` when the point lies outside the bounding box. Points on
    /// the northern or eastern edge belong to the last row or column.
    pub fn resolve_click(&self, point: GeoPoint) -> Option<PixelIndex> {
        let b = &self.bounds;
        let inside = (b.lat_start..=b.lat_end).contains(&point.lat)
            && (b.lng_start..=b.lng_end).contains(&point.lng);
        if !inside {
            return None;
        }

        let (lat_step, lng_step) = self.cell_size();
        let row = ((point.lat - b.lat_start) / lat_step).floor() as usize;
        let col = ((point.lng - b.lng_start) / lng_step).floor() as usize;

        Some(PixelIndex::new(
            row.min(self.height - 1),
            col.min(self.width - 1),
        ))
    }

    fn check_index(&self, index: PixelIndex) -> Result<()> {
        if self.contains_index(index) {
            Ok(())
        } else {
            Err(GrowflowError::IndexOutOfRange {
                row: index.row,
                col: index.col,
                height: self.height,
                width: self.width,
            })
        }
    }
}

fn axis_lines(start: f64, end: f64, step: f64, count: usize) -> Vec<f64> {
    let mut lines: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
    // Pin the last line to the edge so rounding never drifts past it.
    lines.push(end);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_lines_pins_last_value() {
        let lines = axis_lines(0.0, 1.0, 0.1, 10);
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[10], 1.0);
        assert!((lines[3] - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_sorted_swaps() {
        assert_eq!(sorted(3.0, 1.0), (1.0, 3.0));
        assert_eq!(sorted(1.0, 3.0), (1.0, 3.0));
    }
}
