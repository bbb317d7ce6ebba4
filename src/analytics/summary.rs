//! Descriptive panels: selection header, plot table and farm overview.

use serde::Serialize;

use super::format_day;
use crate::data::{FarmData, Metric};
use crate::overrides::{OverrideKey, SelectionIdentity, SprinklingOverrides};
use crate::selection::{Selection, ValidSelection};

/// Header of the analytics panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    /// `Plot {id}` or `Pixel {rrr}{ccc}`.
    pub label: String,
    /// Owner of a plot.
    pub farmer: Option<String>,
    /// Crop of a plot, land use of a pixel.
    pub crop: Option<String>,
    /// Soil type.
    pub soil: Option<String>,
    /// Plot size; a pixel counts as one hectare.
    pub area_hectares: f64,
}

impl SelectionSummary {
    /// Summary of a selection, `None` when nothing is selected.
    pub fn new(data: &FarmData, selection: &ValidSelection) -> Option<Self> {
        match selection.selection() {
            Selection::None => None,
            Selection::Plot(id) => {
                let plot = data.plot(id)?;
                Some(Self {
                    label: format!("Plot {}", plot.plot_id),
                    farmer: non_empty(&plot.farmer_name),
                    crop: non_empty(&plot.crop_type),
                    soil: non_empty(&plot.soil_type),
                    area_hectares: plot.area_hectares,
                })
            }
            Selection::Pixel(index) => Some(Self {
                label: format!("Pixel {:03}{:03}", index.row, index.col),
                farmer: None,
                crop: data.land_use_at(*index),
                soil: data.soil_at(*index),
                area_hectares: 1.0,
            }),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.trim().is_empty()).then(|| s.to_string())
}

/// One line of the plot table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotRow {
    /// Plot id.
    pub plot_id: String,
    /// Owner.
    pub farmer: String,
    /// Crop grown.
    pub crop: String,
    /// Available soil water in mm.
    pub moisture: Option<f64>,
    /// Deficit in mm.
    pub deficit: Option<f64>,
    /// Evapotranspiration in mm.
    pub evapotranspiration: Option<f64>,
    /// Entered sprinkling for the day, 0 when nothing was entered.
    pub sprinkling: f64,
}

/// Every plot with its values on `date`.
///
/// Plots without a record for that day show empty values and no sprinkling.
pub fn plot_table(data: &FarmData, date: &str, overrides: &SprinklingOverrides) -> Vec<PlotRow> {
    let wanted = format_day(date);
    data.plots
        .iter()
        .map(|plot| {
            let days = data.plot_days(&plot.plot_id).unwrap_or_default();
            let found = days
                .iter()
                .enumerate()
                .find(|(_, d)| format_day(&d.date) == wanted);
            let sprinkling = found.map_or(0.0, |(i, _)| {
                overrides.get(&OverrideKey::new(
                    SelectionIdentity::Plot(plot.plot_id.clone()),
                    i,
                ))
            });
            let day = found.map(|(_, d)| d);
            PlotRow {
                plot_id: plot.plot_id.clone(),
                farmer: plot.farmer_name.clone(),
                crop: plot.crop_type.clone(),
                moisture: day.and_then(|d| d.moisture),
                deficit: day.and_then(|d| d.deficit),
                evapotranspiration: day.and_then(|d| d.evapotranspiration),
                sprinkling,
            }
        })
        .collect()
}

/// Farm-wide figures shown when nothing is selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallSummary {
    /// Number of loaded plots.
    pub plot_count: usize,
    /// Pixels with a deficit value on the date.
    pub pixels_with_data: usize,
    /// Mean deficit over those pixels.
    pub mean_deficit: Option<f64>,
    /// Sum of every sprinkling amount entered so far.
    pub total_sprinkling: f64,
}

/// Farm overview on `date`, used while nothing is selected.
pub fn overall_summary(
    data: &FarmData,
    date: &str,
    overrides: &SprinklingOverrides,
) -> OverallSummary {
    let (count, sum) = data
        .pixel_day(date)
        .map(|day| {
            day.layer(Metric::Deficit)
                .iter()
                .filter(|v| v.is_finite())
                .fold((0usize, 0.0), |(n, s), v| (n + 1, s + v))
        })
        .unwrap_or((0, 0.0));

    OverallSummary {
        plot_count: data.plots.len(),
        pixels_with_data: count,
        mean_deficit: (count > 0).then(|| sum / count as f64),
        total_sprinkling: overrides.total(),
    }
}
