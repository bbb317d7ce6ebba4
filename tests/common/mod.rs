#![allow(dead_code)]

use growflow::data::{DataReader, FarmData};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

pub const DATES: [&str; 3] = ["2024-06-01", "2024-06-02", "2024-06-03"];
pub const DEFAULT_DATE: &str = "2024-06-02";

/// 4x4 layer where cell (r, c) of day `d` holds `100 * d + 10 * r + c`.
pub fn layer(day: usize) -> Value {
    let rows: Vec<Vec<Value>> = (0..4)
        .map(|r| {
            (0..4)
                .map(|c| {
                    if day == 0 && r == 0 && c == 0 {
                        Value::Null
                    } else {
                        json!((100 * day + 10 * r + c) as f64)
                    }
                })
                .collect()
        })
        .collect();
    json!(rows)
}

pub fn constant_layer(value: f64) -> Value {
    json!(vec![vec![value; 4]; 4])
}

pub fn pixels() -> Value {
    let analytics: Vec<Value> = DATES
        .iter()
        .enumerate()
        .map(|(d, date)| {
            json!({
                "time": format!("{}T00:00:00", date),
                "deficit": layer(d),
                "measuredPrecipitation": constant_layer(d as f64),
                "availableSoilWater": constant_layer(50.0),
                "desiredSoilWater": constant_layer(80.0),
                "evapotranspiration": constant_layer(2.5),
            })
        })
        .collect();
    json!({
        "dimensions": [4, 4],
        "boundingBox": [4.0, 4.0, 0.0, 0.0],
        "analytics": analytics,
    })
}

pub fn land_use() -> Value {
    json!([[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11], [12, 13, 99, "weide"]])
}

pub fn soil_map() -> Value {
    json!(vec![vec!["zand"; 4]; 4])
}

pub fn plots() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "plotId": "A",
                    "cropTypes": "mais",
                    "soilType": "klei",
                    "plotSizeHa": 2.5,
                    "farmerName": "Jansen"
                },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "plotId": "B", "cropTypes": "gras", "plotSizeHa": 1.0 },
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[2.0, 2.0], [4.0, 2.0], [4.0, 4.0], [2.0, 4.0], [2.0, 2.0]]]
                    ]
                }
            },
            {
                "type": "Feature",
                "properties": { "cropTypes": "orphan" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 3.0], [1.0, 3.0], [1.0, 4.0], [0.0, 3.0]]]
                }
            }
        ]
    })
}

pub fn plot_analytics() -> Value {
    let days: Vec<Value> = DATES
        .iter()
        .enumerate()
        .map(|(i, date)| {
            json!({
                "date": date,
                "measuredPrecipitation": i as f64,
                "availableSoilWater": 40.0,
                "desiredSoilWater": 60.0,
                "evapotranspiration": 3.0,
                "deficit": 10.0 * (i + 1) as f64,
            })
        })
        .collect();
    json!({ "A": days })
}

pub fn bundle() -> Value {
    let mut pixels = pixels();
    pixels["landUse"] = land_use();
    pixels["soilMap"] = soil_map();
    json!({
        "defaultDate": DEFAULT_DATE,
        "pixelsData": pixels,
        "plotsGeoJSON": plots(),
        "plotsAnalytics": plot_analytics(),
    })
}

pub fn load() -> FarmData {
    DataReader::from_json_str(&bundle().to_string()).expect("fixture loads")
}

pub fn write_bundle(dir: &Path) -> PathBuf {
    let path = dir.join("farm.json");
    std::fs::write(&path, bundle().to_string()).expect("write bundle");
    path
}

/// Write the per-file published layout into `dir`.
pub fn write_directory(dir: &Path) {
    let token = DEFAULT_DATE.replace('-', "");
    let files = [
        ("defaults.json".to_string(), json!({ "defaultDate": DEFAULT_DATE })),
        (format!("gwtf-pixels-{}.json", token), pixels()),
        (format!("gwtf-plots-{}.json", token), plots()),
        (format!("gwtf-plot-analytics-{}.json", token), plot_analytics()),
        ("gwtf-land-use.json".to_string(), land_use()),
    ];
    for (name, value) in files {
        std::fs::write(dir.join(name), value.to_string()).expect("write fixture file");
    }
}
