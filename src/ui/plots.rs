//! Plot table.

use crate::analytics::plot_table;
use crate::app::{App, Focus};
use crate::selection::Selection;
use crate::ui::formatters::{format_mm, format_optional};
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Display width of the widest entry, capped at `max`.
fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>, max: u16) -> u16 {
    let widest = cells.map(|s| s.width()).fold(header.width(), usize::max);
    u16::try_from(widest).unwrap_or(u16::MAX).min(max)
}

pub(super) fn draw_plot_table(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let rows = plot_table(&app.data, &app.date, &app.overrides);
    let cfg = &app.layout.table;
    let selected_id = match app.selection.selection() {
        Selection::Plot(id) => Some(id.as_str()),
        _ => None,
    };

    let widths = [
        Constraint::Length(column_width(
            "Plot",
            rows.iter().map(|r| r.plot_id.as_str()),
            cfg.max_column_width,
        )),
        Constraint::Length(column_width(
            "Farmer",
            rows.iter().map(|r| r.farmer.as_str()),
            cfg.max_column_width,
        )),
        Constraint::Length(column_width(
            "Crop",
            rows.iter().map(|r| r.crop.as_str()),
            cfg.max_column_width,
        )),
        Constraint::Length(cfg.number_width),
        Constraint::Length(cfg.number_width),
        Constraint::Length(cfg.number_width),
    ];

    let body: Vec<Row<'_>> = rows
        .iter()
        .map(|r| {
            let style = if selected_id == Some(r.plot_id.as_str()) {
                Style::default()
                    .fg(colors.selected)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            Row::new(vec![
                Cell::from(r.plot_id.clone()),
                Cell::from(r.farmer.clone()),
                Cell::from(r.crop.clone()),
                Cell::from(format_optional(r.moisture)),
                Cell::from(format_optional(r.deficit)),
                Cell::from(format_mm(r.sprinkling)),
            ])
            .style(style)
        })
        .collect();

    let border = if app.focus == Focus::Plots {
        colors.focus
    } else {
        colors.border
    };
    let header = Row::new(vec!["Plot", "Farmer", "Crop", "Moisture", "Deficit", "Sprinkl."])
        .style(Style::default().fg(colors.heading).add_modifier(Modifier::BOLD));
    let table = Table::new(body, widths)
        .header(header)
        .column_spacing(cfg.column_spacing)
        .style(Style::default().bg(colors.bg))
        .row_highlight_style(Style::default().fg(colors.cursor_fg).bg(colors.cursor_bg))
        .block(
            Block::default()
                .title(format!(" Plots ({}) ", rows.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );

    let mut state = TableState::default();
    if app.focus == Focus::Plots && !rows.is_empty() {
        state.select(Some(app.plot_cursor));
    }
    f.render_stateful_widget(table, area, &mut state);
}
