//! JSON dataset reader.
//!
//! Two layouts are understood: a single bundle file holding every part of
//! the dataset, and a directory in the published per-file layout keyed by
//! the default date.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ndarray::Array2;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::{CategoryCell, FarmData, PixelDay, PlotDay, PlotFeature};
use crate::error::{GrowflowError, Result};
use crate::geometry::{self, GeoPoint, Grid, MultiPolygon, Polygon};
use geo_types::LineString;

/// Farm dataset reader.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read a bundle file or a dataset directory.
    pub fn read_file(path: &Path) -> Result<FarmData> {
        if path.is_dir() {
            return Self::read_dir(path);
        }
        let bundle: RawBundle = read_json(path)?;
        bundle.into_farm_data()
    }

    /// Parse a bundle from a JSON string.
    pub fn from_json_str(json: &str) -> Result<FarmData> {
        let bundle: RawBundle = serde_json::from_str(json)?;
        bundle.into_farm_data()
    }

    /// Read the per-file layout: `defaults.json` names the date, the other
    /// files carry the date as `YYYYMMDD` in their names.
    pub fn read_dir(dir: &Path) -> Result<FarmData> {
        let defaults: RawDefaults = read_json(&dir.join("defaults.json"))?;
        let token = defaults.default_date.replace('-', "");

        let mut pixels: RawPixels = read_json(&dir.join(format!("gwtf-pixels-{}.json", token)))?;
        if let Some(land_use) = read_optional_json(&dir.join("gwtf-land-use.json"))? {
            pixels.land_use = Some(land_use);
        }
        if let Some(soil_map) = read_optional_json(&dir.join("gwtf-soil-map.json"))? {
            pixels.soil_map = Some(soil_map);
        }

        let plots: RawFeatureCollection =
            read_json(&dir.join(format!("gwtf-plots-{}.json", token)))?;
        let plots_analytics: HashMap<String, Vec<RawPlotDay>> =
            read_json(&dir.join(format!("gwtf-plot-analytics-{}.json", token)))?;

        RawBundle {
            default_date: defaults.default_date,
            pixels_data: pixels,
            plots_geo_json: plots,
            plots_analytics,
        }
        .into_farm_data()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| GrowflowError::file_open(path.to_path_buf(), e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn read_optional_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        tracing::warn!("{} not found, continuing without it", path.display());
        return Ok(None);
    }
    read_json(path).map(Some)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDefaults {
    default_date: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBundle {
    default_date: String,
    pixels_data: RawPixels,
    #[serde(rename = "plotsGeoJSON")]
    plots_geo_json: RawFeatureCollection,
    #[serde(default)]
    plots_analytics: HashMap<String, Vec<RawPlotDay>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPixels {
    /// `[width, height]`.
    dimensions: [usize; 2],
    /// `[lng1, lat1, lng2, lat2]`.
    bounding_box: [f64; 4],
    #[serde(default)]
    analytics: Vec<RawPixelDay>,
    #[serde(default)]
    land_use: Option<Vec<Vec<Value>>>,
    #[serde(default)]
    soil_map: Option<Vec<Vec<Value>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPixelDay {
    time: String,
    #[serde(default)]
    deficit: Vec<Vec<Value>>,
    #[serde(default)]
    measured_precipitation: Vec<Vec<Value>>,
    #[serde(default)]
    available_soil_water: Vec<Vec<Value>>,
    #[serde(default)]
    desired_soil_water: Vec<Vec<Value>>,
    #[serde(default)]
    evapotranspiration: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct RawFeatureCollection {
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Map<String, Value>,
    #[serde(default)]
    geometry: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlotDay {
    #[serde(default)]
    date: String,
    #[serde(default, deserialize_with = "lenient_number")]
    measured_precipitation: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    available_soil_water: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    desired_soil_water: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    evapotranspiration: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    deficit: Option<f64>,
}

/// Any non-numeric JSON value reads as "no data".
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number))
}

fn number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite())
}

fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

impl RawBundle {
    fn into_farm_data(self) -> Result<FarmData> {
        let [width, height] = self.pixels_data.dimensions;
        let grid = Grid::from_bounding_box(width, height, self.pixels_data.bounding_box)?;

        let pixel_days = self
            .pixels_data
            .analytics
            .into_iter()
            .map(|day| day.into_pixel_day(&grid))
            .collect::<Result<Vec<_>>>()?;

        let land_use = self
            .pixels_data
            .land_use
            .map(|cells| category_grid(cells, &grid, "landUse"))
            .transpose()?;
        let soil_map = self
            .pixels_data
            .soil_map
            .map(|cells| category_grid(cells, &grid, "soilMap"))
            .transpose()?;

        let plots = plot_features(self.plots_geo_json.features);

        let plot_analytics: HashMap<String, Vec<PlotDay>> = self
            .plots_analytics
            .into_iter()
            .map(|(id, days)| {
                let days = days.into_iter().map(RawPlotDay::into_plot_day).collect::<Vec<_>>();
                (id, days)
            })
            .collect();

        tracing::info!(
            "Loaded dataset for {}: {}x{} grid, {} days, {} plots",
            self.default_date,
            width,
            height,
            pixel_days.len(),
            plots.len()
        );

        Ok(FarmData {
            default_date: self.default_date,
            grid,
            pixel_days,
            land_use,
            soil_map,
            plots,
            plot_analytics,
        })
    }
}

impl RawPixelDay {
    fn into_pixel_day(self, grid: &Grid) -> Result<PixelDay> {
        let time = self.time;
        let layer = |rows: Vec<Vec<Value>>, name: &str| numeric_layer(rows, grid, name, &time);
        Ok(PixelDay {
            deficit: layer(self.deficit, "deficit")?,
            rainfall: layer(self.measured_precipitation, "measuredPrecipitation")?,
            moisture: layer(self.available_soil_water, "availableSoilWater")?,
            desired_moisture: layer(self.desired_soil_water, "desiredSoilWater")?,
            evapotranspiration: layer(self.evapotranspiration, "evapotranspiration")?,
            time,
        })
    }
}

impl RawPlotDay {
    fn into_plot_day(self) -> PlotDay {
        PlotDay {
            date: self.date,
            rainfall: self.measured_precipitation,
            moisture: self.available_soil_water,
            desired_moisture: self.desired_soil_water,
            evapotranspiration: self.evapotranspiration,
            deficit: self.deficit,
        }
    }
}

fn check_shape<T>(rows: &[Vec<T>], grid: &Grid, what: &str) -> Result<()> {
    let (height, width) = (grid.height(), grid.width());
    if rows.len() != height || rows.iter().any(|r| r.len() != width) {
        let found_width = rows.first().map(Vec::len).unwrap_or(0);
        return Err(GrowflowError::invalid_dataset(format!(
            "{} is {}x{}, expected {}x{}",
            what,
            rows.len(),
            found_width,
            height,
            width
        )));
    }
    Ok(())
}

/// Missing layers read as all-absent; present layers must match the grid.
fn numeric_layer(rows: Vec<Vec<Value>>, grid: &Grid, name: &str, time: &str) -> Result<Array2<f64>> {
    let shape = (grid.height(), grid.width());
    if rows.is_empty() {
        return Ok(Array2::from_elem(shape, f64::NAN));
    }
    check_shape(&rows, grid, &format!("{} on {}", name, time))?;

    let flat: Vec<f64> = rows
        .iter()
        .flatten()
        .map(|v| number(v).unwrap_or(f64::NAN))
        .collect();
    Array2::from_shape_vec(shape, flat).map_err(|e| GrowflowError::invalid_dataset(e.to_string()))
}

fn category_grid(rows: Vec<Vec<Value>>, grid: &Grid, name: &str) -> Result<Array2<CategoryCell>> {
    check_shape(&rows, grid, name)?;
    let flat: Vec<CategoryCell> = rows
        .into_iter()
        .flatten()
        .map(|v| match v {
            Value::Number(n) => match n.as_i64() {
                Some(code) => CategoryCell::Code(code),
                None => CategoryCell::Label(n.to_string()),
            },
            Value::String(s) => CategoryCell::Label(s),
            _ => CategoryCell::Missing,
        })
        .collect();
    Array2::from_shape_vec((grid.height(), grid.width()), flat)
        .map_err(|e| GrowflowError::invalid_dataset(e.to_string()))
}

/// Features without a plot id are dropped, as are repeated ids.
fn plot_features(features: Vec<RawFeature>) -> Vec<PlotFeature> {
    let mut seen = HashSet::new();
    let mut plots = Vec::with_capacity(features.len());

    for feature in features {
        let props = &feature.properties;
        let plot_id = text(props.get("plotId"));
        if plot_id.is_empty() {
            continue;
        }
        if !seen.insert(plot_id.clone()) {
            tracing::warn!("Dropping duplicate plot {}", plot_id);
            continue;
        }

        let outline = feature
            .geometry
            .as_ref()
            .and_then(parse_geometry)
            .unwrap_or_else(|| {
                tracing::warn!("Plot {} has no usable polygon geometry", plot_id);
                MultiPolygon::new(Vec::new())
            });

        plots.push(PlotFeature {
            crop_type: text(props.get("cropTypes")),
            soil_type: text(props.get("soilType")),
            area_hectares: props.get("plotSizeHa").and_then(number).unwrap_or(0.0),
            farmer_name: text(props.get("farmerName")),
            outline,
            plot_id,
        });
    }

    plots
}

fn parse_geometry(geometry: &Value) -> Option<MultiPolygon> {
    let coordinates = geometry.get("coordinates")?;
    let parts = match geometry.get("type")?.as_str()? {
        "Polygon" => vec![parse_polygon(coordinates)?],
        "MultiPolygon" => coordinates
            .as_array()?
            .iter()
            .map(parse_polygon)
            .collect::<Option<Vec<_>>>()?,
        _ => return None,
    };
    Some(MultiPolygon::new(parts))
}

fn parse_polygon(coordinates: &Value) -> Option<Polygon> {
    let mut rings = coordinates
        .as_array()?
        .iter()
        .map(parse_ring)
        .collect::<Option<Vec<_>>>()?
        .into_iter();
    let exterior = rings.next()?;
    Some(Polygon::new(exterior, rings.collect()))
}

/// GeoJSON positions are `[lng, lat, ...]`.
fn parse_ring(positions: &Value) -> Option<LineString<f64>> {
    let points = positions
        .as_array()?
        .iter()
        .map(|position| {
            let position = position.as_array()?;
            let lng = position.first()?.as_f64()?;
            let lat = position.get(1)?.as_f64()?;
            Some(GeoPoint::new(lat, lng))
        })
        .collect::<Option<Vec<_>>>()?;
    Some(geometry::ring(points))
}
