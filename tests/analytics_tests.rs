mod common;

use growflow::analytics::{
    format_day, overall_summary, plot_table, project, snapshot, CurrentValues, SelectionSummary,
};
use growflow::geometry::PixelIndex;
use growflow::overrides::{OverrideKey, SelectionIdentity, SprinklingOverrides};
use growflow::selection::{validate, Selection, ValidSelection};

fn plot_a() -> ValidSelection {
    validate(Selection::Plot("A".into()), &common::load()).unwrap()
}

#[test]
fn test_plot_series_merges_sprinkling() {
    let data = common::load();
    let overrides = SprinklingOverrides::new().set(
        OverrideKey::new(SelectionIdentity::Plot("A".into()), 1),
        5.0,
    );

    let series = project(&data, &plot_a(), &overrides);
    let sprinkling: Vec<f64> = series.iter().map(|p| p.sprinkling).collect();
    let deficit: Vec<Option<f64>> = series.iter().map(|p| p.deficit).collect();
    let dates: Vec<&str> = series.iter().map(|p| p.date.as_str()).collect();

    assert_eq!(sprinkling, vec![0.0, 5.0, 0.0]);
    assert_eq!(deficit, vec![Some(10.0), Some(20.0), Some(30.0)]);
    assert_eq!(dates, vec!["01/06/2024", "02/06/2024", "03/06/2024"]);
    assert_eq!(series[2].rainfall, Some(2.0));
    assert_eq!(series[0].desired_moisture, Some(60.0));
}

#[test]
fn test_pixel_series_reads_each_day() {
    let data = common::load();
    let selection = validate(Selection::Pixel(PixelIndex::new(2, 1)), &data).unwrap();
    let overrides = SprinklingOverrides::new().set(
        OverrideKey::new(SelectionIdentity::Pixel(PixelIndex::new(2, 1)), 2),
        3.0,
    );

    let series = project(&data, &selection, &overrides);
    assert_eq!(series.len(), 3);
    let deficit: Vec<Option<f64>> = series.iter().map(|p| p.deficit).collect();
    assert_eq!(deficit, vec![Some(21.0), Some(121.0), Some(221.0)]);
    assert_eq!(series[2].sprinkling, 3.0);
    assert_eq!(series[1].evapotranspiration, Some(2.5));
}

#[test]
fn test_pixel_series_keeps_absent_values() {
    let data = common::load();
    let selection = validate(Selection::Pixel(PixelIndex::new(0, 0)), &data).unwrap();
    let series = project(&data, &selection, &SprinklingOverrides::new());
    assert_eq!(series[0].deficit, None);
    assert_eq!(series[1].deficit, Some(100.0));
}

#[test]
fn test_no_selection_has_no_series() {
    let data = common::load();
    assert!(project(&data, &ValidSelection::none(), &SprinklingOverrides::new()).is_empty());
}

#[test]
fn test_snapshot_by_day() {
    let data = common::load();
    let series = project(&data, &plot_a(), &SprinklingOverrides::new());

    let point = snapshot(&series, "2024-06-02").unwrap();
    assert_eq!(point.deficit, Some(20.0));
    assert_eq!(snapshot(&series, "2024-06-03T18:30:00").unwrap().deficit, Some(30.0));
    assert!(snapshot(&series, "2024-07-01").is_none());
}

#[test]
fn test_missing_snapshot_reads_zero() {
    let values = CurrentValues::from_snapshot(None);
    assert_eq!(values, CurrentValues::default());
    assert_eq!(values.rainfall, 0.0);
    assert_eq!(values.evapotranspiration, 0.0);
    assert_eq!(values.deficit, 0.0);
    assert_eq!(values.sprinkling, 0.0);
}

#[test]
fn test_current_values_from_snapshot() {
    let data = common::load();
    let overrides = SprinklingOverrides::new().set(
        OverrideKey::new(SelectionIdentity::Plot("A".into()), 1),
        4.0,
    );
    let series = project(&data, &plot_a(), &overrides);
    let values = CurrentValues::from_snapshot(snapshot(&series, "2024-06-02"));
    assert_eq!(
        values,
        CurrentValues {
            rainfall: 1.0,
            evapotranspiration: 3.0,
            deficit: 20.0,
            sprinkling: 4.0,
        }
    );
}

#[test]
fn test_format_day() {
    assert_eq!(format_day("2024-06-02"), "02/06/2024");
    assert_eq!(format_day("2024-06-02T00:00:00Z"), "02/06/2024");
    assert_eq!(format_day("not a date"), "not a date");
}

#[test]
fn test_selection_summary_labels() {
    let data = common::load();

    let plot = SelectionSummary::new(&data, &plot_a()).unwrap();
    assert_eq!(plot.label, "Plot A");
    assert_eq!(plot.crop.as_deref(), Some("mais"));
    assert_eq!(plot.soil.as_deref(), Some("klei"));
    assert_eq!(plot.farmer.as_deref(), Some("Jansen"));
    assert_eq!(plot.area_hectares, 2.5);

    let selection = validate(Selection::Pixel(PixelIndex::new(1, 2)), &data).unwrap();
    let pixel = SelectionSummary::new(&data, &selection).unwrap();
    assert_eq!(pixel.label, "Pixel 001002");
    assert_eq!(pixel.crop.as_deref(), Some("boomteelt"));
    assert_eq!(pixel.soil.as_deref(), Some("zand"));
    assert_eq!(pixel.area_hectares, 1.0);

    assert!(SelectionSummary::new(&data, &ValidSelection::none()).is_none());
}

#[test]
fn test_land_use_unknown_codes_and_labels() {
    let data = common::load();
    let at = |row, col| {
        let selection = validate(Selection::Pixel(PixelIndex::new(row, col)), &data).unwrap();
        SelectionSummary::new(&data, &selection).unwrap().crop
    };
    assert_eq!(at(0, 0).as_deref(), Some("gras"));
    assert_eq!(at(3, 2).as_deref(), Some("99"));
    assert_eq!(at(3, 3).as_deref(), Some("weide"));
}

#[test]
fn test_plot_table_rows() {
    let data = common::load();
    let overrides = SprinklingOverrides::new().set(
        OverrideKey::new(SelectionIdentity::Plot("A".into()), 2),
        6.0,
    );

    let rows = plot_table(&data, "2024-06-03", &overrides);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].plot_id, "A");
    assert_eq!(rows[0].farmer, "Jansen");
    assert_eq!(rows[0].deficit, Some(30.0));
    assert_eq!(rows[0].sprinkling, 6.0);

    assert_eq!(rows[1].plot_id, "B");
    assert_eq!(rows[1].deficit, None);
    assert_eq!(rows[1].sprinkling, 0.0);
}

#[test]
fn test_overall_summary() {
    let data = common::load();
    let overrides = SprinklingOverrides::new()
        .set(OverrideKey::new(SelectionIdentity::Plot("A".into()), 0), 2.0)
        .set(
            OverrideKey::new(SelectionIdentity::Pixel(PixelIndex::new(0, 1)), 0),
            3.0,
        );

    let summary = overall_summary(&data, "2024-06-01", &overrides);
    assert_eq!(summary.plot_count, 2);
    // Cell (0, 0) is absent on the first day.
    assert_eq!(summary.pixels_with_data, 15);
    let expected = (0..4)
        .flat_map(|r| (0..4).map(move |c| (10 * r + c) as f64))
        .sum::<f64>()
        / 15.0;
    assert!((summary.mean_deficit.unwrap() - expected).abs() < 1e-9);
    assert_eq!(summary.total_sprinkling, 5.0);

    let empty = overall_summary(&data, "2030-01-01", &overrides);
    assert_eq!(empty.pixels_with_data, 0);
    assert_eq!(empty.mean_deficit, None);
}
