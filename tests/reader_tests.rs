mod common;

use growflow::data::{DataReader, Metric};
use growflow::geometry::{Bounds, PixelIndex};
use growflow::GrowflowError;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_bundle_loads() {
    let data = common::load();

    assert_eq!(data.default_date, "2024-06-02");
    assert_eq!((data.grid.width(), data.grid.height()), (4, 4));
    assert_eq!(
        data.grid.bounds(),
        Bounds {
            lat_start: 0.0,
            lat_end: 4.0,
            lng_start: 0.0,
            lng_end: 4.0,
        }
    );
    assert_eq!(data.pixel_days.len(), 3);
    // The feature without a plot id is dropped.
    let ids: Vec<&str> = data.plots.iter().map(|p| p.plot_id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);
    assert_eq!(data.plot_days("A").map(<[_]>::len), Some(3));
    assert!(data.plot_days("B").is_none());
}

#[test]
fn test_pixel_day_lookup_by_day() {
    let data = common::load();
    assert!(data.is_date_loaded("2024-06-02"));
    assert!(!data.is_date_loaded("2024-06-03"));

    let day = data.pixel_day("2024-06-03").unwrap();
    assert_eq!(day.value(Metric::Deficit, PixelIndex::new(3, 1)), Some(231.0));
    assert_eq!(day.value(Metric::Rainfall, PixelIndex::new(3, 1)), Some(2.0));
    assert_eq!(data.pixel_day_index("2024-06-01"), Some(0));
    assert!(data.pixel_day("2024-05-31").is_none());
}

#[test]
fn test_read_file_and_directory_agree() {
    let tmp = TempDir::new().unwrap();
    let bundle_path = common::write_bundle(tmp.path());
    let from_file = DataReader::read_file(&bundle_path).unwrap();

    let dir = TempDir::new().unwrap();
    common::write_directory(dir.path());
    let from_dir = DataReader::read_file(dir.path()).unwrap();

    assert_eq!(from_dir.default_date, from_file.default_date);
    assert_eq!(from_dir.grid, from_file.grid);
    assert_eq!(from_dir.plots, from_file.plots);
    assert_eq!(from_dir.land_use, from_file.land_use);
    // The soil map file is optional.
    assert!(from_dir.soil_map.is_none());
    assert!(from_file.soil_map.is_some());
}

#[test]
fn test_missing_directory_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("defaults.json"), r#"{"defaultDate":"2024-06-02"}"#).unwrap();
    let result = DataReader::read_dir(dir.path());
    assert!(matches!(result, Err(GrowflowError::FileOpen { .. })));
}

#[test]
fn test_layer_shape_mismatch_fails() {
    let mut bundle = common::bundle();
    bundle["pixelsData"]["analytics"][1]["deficit"] = json!([[1.0, 2.0], [3.0, 4.0]]);
    let result = DataReader::from_json_str(&bundle.to_string());
    assert!(matches!(result, Err(GrowflowError::InvalidDataset(_))));
}

#[test]
fn test_missing_layer_reads_absent() {
    let mut bundle = common::bundle();
    bundle["pixelsData"]["analytics"][0]
        .as_object_mut()
        .unwrap()
        .remove("evapotranspiration");
    let data = DataReader::from_json_str(&bundle.to_string()).unwrap();
    let day = &data.pixel_days[0];
    assert_eq!(day.value(Metric::Evapotranspiration, PixelIndex::new(1, 1)), None);
}

#[test]
fn test_degenerate_bounding_box_fails() {
    let mut bundle = common::bundle();
    bundle["pixelsData"]["boundingBox"] = json!([4.0, 1.0, 4.0, 2.0]);
    let result = DataReader::from_json_str(&bundle.to_string());
    assert!(matches!(result, Err(GrowflowError::DegenerateGrid { .. })));
}

#[test]
fn test_non_numeric_plot_values_are_absent() {
    let mut bundle = common::bundle();
    bundle["plotsAnalytics"]["A"][0]["deficit"] = json!("n/a");
    let data = DataReader::from_json_str(&bundle.to_string()).unwrap();
    assert_eq!(data.plot_days("A").unwrap()[0].deficit, None);
}

#[test]
fn test_invalid_json_fails() {
    let result = DataReader::from_json_str("{ not json");
    assert!(matches!(result, Err(GrowflowError::Json(_))));
}
