//! Plot and cell outlines as `geo-types` polygons.
//!
//! Coordinates follow the GeoJSON order: `x` is longitude, `y` latitude.

use geo::algorithm::coordinate_position::{CoordPos, CoordinatePosition};
use geo::Centroid;
use geo_types::{Coord, LineString, Point};

use super::GeoPoint;

impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        Coord {
            x: point.lng,
            y: point.lat,
        }
    }
}

impl From<Coord<f64>> for GeoPoint {
    fn from(coord: Coord<f64>) -> Self {
        GeoPoint::new(coord.y, coord.x)
    }
}

/// Build a ring from latitude/longitude points.
///
/// Open rings are closed when they are wrapped in a polygon.
pub fn ring(points: impl IntoIterator<Item = GeoPoint>) -> LineString<f64> {
    points.into_iter().map(Coord::from).collect()
}

/// Whether the point lies inside the outline or on its boundary.
pub fn covers<G>(outline: &G, point: GeoPoint) -> bool
where
    G: CoordinatePosition<Scalar = f64>,
{
    outline.coordinate_position(&Coord::from(point)) != CoordPos::Outside
}

/// Area-weighted centroid of an outline.
///
/// Outlines without enclosed area fall back to the centroid of their
/// boundary; empty outlines have none.
pub fn centroid<G>(outline: &G) -> Option<GeoPoint>
where
    G: Centroid<Output = Option<Point<f64>>>,
{
    outline.centroid().map(|p| GeoPoint::from(p.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{MultiPolygon, Polygon};

    fn square(lat: f64, lng: f64, size: f64) -> LineString<f64> {
        ring([
            GeoPoint::new(lat, lng),
            GeoPoint::new(lat, lng + size),
            GeoPoint::new(lat + size, lng + size),
            GeoPoint::new(lat + size, lng),
        ])
    }

    #[test]
    fn test_covers_interior_and_edge() {
        let poly = Polygon::new(square(0.0, 0.0, 2.0), vec![]);
        assert!(covers(&poly, GeoPoint::new(1.0, 1.0)));
        assert!(covers(&poly, GeoPoint::new(0.0, 1.0)));
        assert!(covers(&poly, GeoPoint::new(2.0, 2.0)));
        assert!(!covers(&poly, GeoPoint::new(2.5, 1.0)));
    }

    #[test]
    fn test_hole_excludes_points() {
        let poly = Polygon::new(square(0.0, 0.0, 4.0), vec![square(1.0, 1.0, 2.0)]);
        assert!(!covers(&poly, GeoPoint::new(2.0, 2.0)));
        assert!(covers(&poly, GeoPoint::new(0.5, 0.5)));
    }

    #[test]
    fn test_centroid_uses_lat_lng_order() {
        let poly = Polygon::new(square(10.0, 20.0, 2.0), vec![]);
        let c = centroid(&poly).unwrap();
        assert!((c.lat - 11.0).abs() < 1e-9);
        assert!((c.lng - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_centroid_weights_parts_by_area() {
        let parts = MultiPolygon::new(vec![
            Polygon::new(square(0.0, 0.0, 2.0), vec![]),
            Polygon::new(square(0.0, 10.0, 1.0), vec![]),
        ]);
        let c = centroid(&parts).unwrap();
        // (4 * 1.0 + 1 * 10.5) / 5
        assert!((c.lng - 2.9).abs() < 1e-9);
        assert!((c.lat - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_centroid_falls_back_to_boundary() {
        let line = Polygon::new(
            ring([GeoPoint::new(0.0, 0.0), GeoPoint::new(2.0, 2.0)]),
            vec![],
        );
        let c = centroid(&line).unwrap();
        assert!((c.lat - 1.0).abs() < 1e-12);
        assert!((c.lng - 1.0).abs() < 1e-12);
        assert_eq!(centroid(&MultiPolygon::<f64>::new(vec![])), None);
    }
}
