//! Analytics panel: selection header, current values and the day series.

use crate::analytics::{overall_summary, SelectionSummary};
use crate::app::App;
use crate::ui::formatters::{format_count, format_mm, format_optional};
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
    Frame,
};

fn field<'a>(label: &'a str, value: String, colors: &ThemeColors) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(colors.label)),
        Span::styled(value, Style::default().fg(colors.value)),
    ])
}

pub(super) fn draw_summary(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let heading = Style::default()
        .fg(colors.heading)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    match SelectionSummary::new(&app.data, &app.selection) {
        None => {
            let overview = overall_summary(&app.data, &app.date, &app.overrides);
            lines.push(Line::from(Span::styled("Farm overview", heading)));
            lines.push(field("Plots", format_count(overview.plot_count), colors));
            lines.push(field(
                "Pixels",
                format_count(overview.pixels_with_data),
                colors,
            ));
            lines.push(field(
                "Mean deficit",
                format!("{} mm", format_optional(overview.mean_deficit)),
                colors,
            ));
            lines.push(field(
                "Sprinkling",
                format!("{} mm entered", format_mm(overview.total_sprinkling)),
                colors,
            ));
        }
        Some(summary) => {
            let current = app.current_values();
            lines.push(Line::from(Span::styled(summary.label, heading)));
            if let Some(farmer) = summary.farmer {
                lines.push(field("Farmer", farmer, colors));
            }
            lines.push(field(
                "Crop",
                summary.crop.unwrap_or_else(|| "-".to_string()),
                colors,
            ));
            lines.push(field(
                "Soil",
                summary.soil.unwrap_or_else(|| "-".to_string()),
                colors,
            ));
            lines.push(field(
                "Area",
                format!("{:.2} ha", summary.area_hectares),
                colors,
            ));
            if let Some(center) = app.selection_center() {
                lines.push(field(
                    "Center",
                    format!("{:.5}, {:.5}", center.lat, center.lng),
                    colors,
                ));
            }
            lines.push(field(
                "Today",
                format!(
                    "rain {} | ET {} | deficit {} | sprinkling {}",
                    format_mm(current.rainfall),
                    format_mm(current.evapotranspiration),
                    format_mm(current.deficit),
                    format_mm(current.sprinkling),
                ),
                colors,
            ));
        }
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(colors.text).bg(colors.bg))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        );
    f.render_widget(paragraph, area);
}

pub(super) fn draw_chart(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let title = match app.highlighted_day() {
        Some(day) => format!(
            " Series (mm) | {} sprinkling {} ",
            day.date,
            format_mm(day.sprinkling)
        ),
        None => " Series (mm) ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    if app.series.is_empty() {
        let para = Paragraph::new("Select a plot or pixel to see its series")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    }

    let points = |pick: fn(&crate::analytics::DayPoint) -> Option<f64>| -> Vec<(f64, f64)> {
        app.series
            .iter()
            .enumerate()
            .filter_map(|(i, p)| pick(p).map(|v| (i as f64, v)))
            .collect()
    };
    let deficit = points(|p| p.deficit);
    let moisture = points(|p| p.moisture);
    let sprinkling = points(|p| Some(p.sprinkling).filter(|v| *v > 0.0));
    let highlight: Vec<(f64, f64)> = app
        .highlighted_day()
        .map(|p| (app.day_cursor as f64, p.sprinkling))
        .into_iter()
        .collect();

    let (min_val, max_val) = deficit
        .iter()
        .chain(&moisture)
        .chain(&sprinkling)
        .chain(&highlight)
        .map(|&(_, v)| v)
        .fold((0.0_f64, 0.0_f64), |(min, max), v| (min.min(v), max.max(v)));
    let range = if (max_val - min_val).abs() < 1e-10 {
        1.0
    } else {
        max_val - min_val
    };
    let pad = range * app.layout.chart.y_axis_padding_factor;
    let last = (app.series.len() - 1).max(1) as f64;

    let datasets = vec![
        Dataset::default()
            .name("deficit")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.deficit))
            .data(&deficit),
        Dataset::default()
            .name("moisture")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.moisture))
            .data(&moisture),
        Dataset::default()
            .name("sprinkling")
            .marker(Marker::HalfBlock)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(colors.sprinkling))
            .data(&sprinkling),
        Dataset::default()
            .name("day")
            .marker(Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .data(&highlight),
    ];

    let first_day = app.series.first().map(|p| p.date.clone()).unwrap_or_default();
    let last_day = app.series.last().map(|p| p.date.clone()).unwrap_or_default();
    let chart = Chart::new(datasets)
        .block(block)
        .style(Style::default().fg(colors.text).bg(colors.bg))
        .x_axis(
            Axis::default()
                .bounds([0.0, last])
                .labels(vec![first_day, last_day])
                .style(Style::default().fg(colors.label)),
        )
        .y_axis(
            Axis::default()
                .bounds([min_val - pad, max_val + pad])
                .labels(vec![format_mm(min_val), format_mm(max_val)])
                .style(Style::default().fg(colors.label)),
        );
    f.render_widget(chart, area);
}
