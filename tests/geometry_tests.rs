use growflow::geometry::{covers, normalize_bounds, Bounds, GeoPoint, Grid, PixelIndex};
use growflow::GrowflowError;

fn grid_4x4() -> Grid {
    let bounds = normalize_bounds(GeoPoint::new(0.0, 0.0), GeoPoint::new(4.0, 4.0)).unwrap();
    Grid::new(4, 4, bounds).unwrap()
}

#[test]
fn test_normalize_bounds_sorts_each_axis() {
    let bounds = normalize_bounds(GeoPoint::new(52.1, 4.3), GeoPoint::new(51.9, 4.9)).unwrap();
    assert_eq!(
        bounds,
        Bounds {
            lat_start: 51.9,
            lat_end: 52.1,
            lng_start: 4.3,
            lng_end: 4.9,
        }
    );
}

#[test]
fn test_degenerate_bounds_rejected() {
    let result = normalize_bounds(GeoPoint::new(1.0, 0.0), GeoPoint::new(1.0, 5.0));
    assert!(matches!(result, Err(GrowflowError::DegenerateGrid { .. })));

    let result = Grid::from_bounding_box(3, 3, [2.0, 0.0, 2.0, 1.0]);
    assert!(matches!(result, Err(GrowflowError::DegenerateGrid { .. })));
}

#[test]
fn test_zero_dimensions_rejected() {
    let bounds = normalize_bounds(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)).unwrap();
    assert!(Grid::new(0, 4, bounds).is_err());
    assert!(Grid::new(4, 0, bounds).is_err());
}

#[test]
fn test_unnormalized_bounds_rejected() {
    let flipped = Bounds {
        lat_start: 4.0,
        lat_end: 0.0,
        lng_start: 0.0,
        lng_end: 4.0,
    };
    let result = Grid::new(4, 4, flipped);
    assert!(matches!(result, Err(GrowflowError::DegenerateGrid { .. })));

    let flat = Bounds {
        lng_end: 0.0,
        ..flipped
    };
    assert!(Grid::new(4, 4, flat).is_err());

    let infinite = Bounds {
        lat_start: 0.0,
        lat_end: f64::INFINITY,
        lng_start: 0.0,
        lng_end: 4.0,
    };
    assert!(Grid::new(4, 4, infinite).is_err());
}

#[test]
fn test_cell_size_positive_and_lines_reach_edges() {
    let grid = Grid::from_bounding_box(7, 3, [4.31, 51.92, 4.97, 52.13]).unwrap();
    let (lat_step, lng_step) = grid.cell_size();
    assert!(lat_step > 0.0);
    assert!(lng_step > 0.0);

    let lat_lines = grid.lat_lines();
    assert_eq!(lat_lines.len(), 4);
    assert_eq!(lat_lines[0], 51.92);
    assert_eq!(*lat_lines.last().unwrap(), 52.13);

    let lng_lines = grid.lng_lines();
    assert_eq!(lng_lines.len(), 8);
    assert_eq!(*lng_lines.last().unwrap(), 4.97);
}

#[test]
fn test_grid_lines_latitude_first() {
    let grid = grid_4x4();
    let lines = grid.grid_lines();
    assert_eq!(lines.len(), 10);

    let first = lines[0];
    assert_eq!(first.from, GeoPoint::new(0.0, 0.0));
    assert_eq!(first.to, GeoPoint::new(0.0, 4.0));

    let vertical = lines[5];
    assert_eq!(vertical.from, GeoPoint::new(0.0, 0.0));
    assert_eq!(vertical.to, GeoPoint::new(4.0, 0.0));
}

#[test]
fn test_click_scenario() {
    let grid = grid_4x4();
    assert_eq!(
        grid.resolve_click(GeoPoint::new(2.5, 1.2)),
        Some(PixelIndex::new(2, 1))
    );
}

#[test]
fn test_click_edges() {
    let grid = grid_4x4();
    assert_eq!(
        grid.resolve_click(GeoPoint::new(0.0, 0.0)),
        Some(PixelIndex::new(0, 0))
    );
    assert_eq!(
        grid.resolve_click(GeoPoint::new(4.0, 4.0)),
        Some(PixelIndex::new(3, 3))
    );
    assert_eq!(grid.resolve_click(GeoPoint::new(4.01, 1.0)), None);
    assert_eq!(grid.resolve_click(GeoPoint::new(1.0, -0.5)), None);
    assert_eq!(grid.resolve_click(GeoPoint::new(f64::NAN, 1.0)), None);
}

#[test]
fn test_click_lands_in_pixel_polygon() {
    let grid = Grid::from_bounding_box(9, 5, [4.31, 51.92, 4.97, 52.13]).unwrap();
    let points = [
        GeoPoint::new(51.95, 4.40),
        GeoPoint::new(52.0, 4.6),
        GeoPoint::new(52.129, 4.969),
        GeoPoint::new(51.92, 4.31),
    ];
    for point in points {
        let index = grid.resolve_click(point).unwrap();
        let polygon = grid.pixel_polygon(index).unwrap();
        assert!(covers(&polygon, point), "{:?} not in pixel {}", point, index);
    }
}

#[test]
fn test_pixel_polygon_corners() {
    let grid = grid_4x4();
    let polygon = grid.pixel_polygon(PixelIndex::new(2, 1)).unwrap();
    let corners: Vec<GeoPoint> = polygon.exterior().coords().map(|&c| c.into()).collect();
    assert_eq!(
        corners,
        vec![
            GeoPoint::new(2.0, 1.0),
            GeoPoint::new(2.0, 2.0),
            GeoPoint::new(3.0, 2.0),
            GeoPoint::new(3.0, 1.0),
            GeoPoint::new(2.0, 1.0),
        ]
    );
}

#[test]
fn test_pixel_center_uses_origin_corner() {
    let grid = grid_4x4();
    let index = PixelIndex::new(3, 2);
    let center = grid.pixel_center(index).unwrap();
    assert_eq!(center, GeoPoint::new(3.0, 2.0));
    assert_eq!(grid.resolve_click(center), Some(index));
}

#[test]
fn test_out_of_range_index_is_an_error() {
    let grid = grid_4x4();
    let result = grid.pixel_polygon(PixelIndex::new(4, 0));
    assert!(matches!(
        result,
        Err(GrowflowError::IndexOutOfRange {
            row: 4,
            col: 0,
            height: 4,
            width: 4
        })
    ));
    assert!(grid.pixel_center(PixelIndex::new(0, 9)).is_err());
}

#[test]
fn test_grid_center() {
    let grid = Grid::from_bounding_box(2, 2, [4.0, 52.0, 5.0, 53.0]).unwrap();
    assert_eq!(grid.center(), GeoPoint::new(52.5, 4.5));
}
