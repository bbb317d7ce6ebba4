//! User interface rendering.

mod dialog;
mod formatters;
mod keymap_bar;
mod map;
mod panel;
mod plots;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let map_share = app.layout.map.width_percent.min(100);
    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(map_share),
            Constraint::Percentage(100 - map_share),
        ])
        .split(chunks[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Min(app.layout.chart.min_height),
            Constraint::Percentage(35),
        ])
        .split(content[1]);

    map::draw_map(f, content[0], app, &colors);
    panel::draw_summary(f, side[0], app, &colors);
    panel::draw_chart(f, side[1], app, &colors);
    plots::draw_plot_table(f, side[2], app, &colors);

    status_bar::draw_status(f, chunks[1], app, &colors);
    keymap_bar::draw_keymap(f, chunks[2], app, &colors);

    if app.dialog.is_open() {
        dialog::draw_dialog(f, app, &colors);
    }
}
