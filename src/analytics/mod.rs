//! Time-series projection for the selected plot or pixel.
//!
//! [`project`] reads the stored day records of a selection and merges in the
//! sprinkling amounts the user entered. Stored values are never modified:
//! sprinkling is reported next to the deficit, it does not change it.

mod summary;

pub use summary::{overall_summary, plot_table, OverallSummary, PlotRow, SelectionSummary};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::data::{FarmData, Metric};
use crate::overrides::{OverrideKey, SelectionIdentity, SprinklingOverrides};
use crate::selection::{Selection, ValidSelection};

/// Display format of a day.
pub const DAY_FORMAT: &str = "%d/%m/%Y";

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y%m%d", DAY_FORMAT];

/// Format a time stamp as `dd/mm/yyyy`.
///
/// Accepts plain dates, naive date-times and RFC 3339 stamps. Anything else
/// is returned unchanged so that it still compares equal to itself.
pub fn format_day(stamp: &str) -> String {
    parse_day(stamp)
        .map(|d| d.format(DAY_FORMAT).to_string())
        .unwrap_or_else(|| stamp.to_string())
}

fn parse_day(stamp: &str) -> Option<NaiveDate> {
    let stamp = stamp.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(stamp) {
        return Some(dt.date_naive());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(stamp, f).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(stamp, f).ok())
        })
}

/// One day of the projected series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPoint {
    /// Day as `dd/mm/yyyy`.
    pub date: String,
    /// Measured precipitation in mm.
    pub rainfall: Option<f64>,
    /// Entered sprinkling amount, 0 when nothing was entered.
    pub sprinkling: f64,
    /// Available soil water in mm.
    pub moisture: Option<f64>,
    /// Desired soil water in mm.
    pub desired_moisture: Option<f64>,
    /// Evapotranspiration in mm.
    pub evapotranspiration: Option<f64>,
    /// Shortfall of available against desired soil water, in mm.
    pub deficit: Option<f64>,
}

/// Build the day series of a selection with sprinkling merged in.
///
/// Plots follow their stored analytics order; pixels follow the dataset's
/// day order. The empty selection has no series.
pub fn project(
    data: &FarmData,
    selection: &ValidSelection,
    overrides: &SprinklingOverrides,
) -> Vec<DayPoint> {
    let Some(identity) = SelectionIdentity::from_selection(selection.selection()) else {
        return Vec::new();
    };
    let sprinkling = |day: usize| overrides.get(&OverrideKey::new(identity.clone(), day));

    match selection.selection() {
        Selection::None => Vec::new(),
        Selection::Plot(id) => data
            .plot_days(id)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(i, day)| DayPoint {
                date: format_day(&day.date),
                rainfall: day.rainfall,
                sprinkling: sprinkling(i),
                moisture: day.moisture,
                desired_moisture: day.desired_moisture,
                evapotranspiration: day.evapotranspiration,
                deficit: day.deficit,
            })
            .collect(),
        Selection::Pixel(index) => data
            .pixel_days
            .iter()
            .enumerate()
            .map(|(i, day)| DayPoint {
                date: format_day(&day.time),
                rainfall: day.value(Metric::Rainfall, *index),
                sprinkling: sprinkling(i),
                moisture: day.value(Metric::Moisture, *index),
                desired_moisture: day.value(Metric::DesiredMoisture, *index),
                evapotranspiration: day.value(Metric::Evapotranspiration, *index),
                deficit: day.value(Metric::Deficit, *index),
            })
            .collect(),
    }
}

/// The point of `series` on the same day as `date`.
pub fn snapshot<'a>(series: &'a [DayPoint], date: &str) -> Option<&'a DayPoint> {
    let wanted = format_day(date);
    series.iter().find(|p| p.date == wanted)
}

/// Headline numbers for the current day; absent values read as 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentValues {
    /// Rainfall in mm.
    pub rainfall: f64,
    /// Evapotranspiration in mm.
    pub evapotranspiration: f64,
    /// Deficit in mm.
    pub deficit: f64,
    /// Entered sprinkling in mm.
    pub sprinkling: f64,
}

impl CurrentValues {
    /// Read the values of a snapshot day; a missing day gives all zeros.
    pub fn from_snapshot(point: Option<&DayPoint>) -> Self {
        let Some(p) = point else {
            return Self::default();
        };
        Self {
            rainfall: p.rainfall.unwrap_or(0.0),
            evapotranspiration: p.evapotranspiration.unwrap_or(0.0),
            deficit: p.deficit.unwrap_or(0.0),
            sprinkling: p.sprinkling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_day_variants() {
        assert_eq!(format_day("2024-06-01"), "01/06/2024");
        assert_eq!(format_day("20240601"), "01/06/2024");
        assert_eq!(format_day("2024-06-01T13:45:00"), "01/06/2024");
        assert_eq!(format_day("2024-06-01 00:00:00.000"), "01/06/2024");
        assert_eq!(format_day("2024-06-01T23:00:00+02:00"), "01/06/2024");
        assert_eq!(format_day("01/06/2024"), "01/06/2024");
    }

    #[test]
    fn test_format_day_keeps_unknown() {
        assert_eq!(format_day("day one"), "day one");
    }
}
