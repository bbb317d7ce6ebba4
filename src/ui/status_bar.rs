//! Status bar UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the status bar: current route on the left, message after it.
pub(super) fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let style = Style::default().fg(colors.status_fg).bg(colors.status_bg);
    let line = match app.dialog.error() {
        Some(error) => Line::from(Span::styled(error.to_string(), style.fg(colors.error))),
        None => Line::from(vec![
            Span::styled(format!(" {} ", app.route()), style.fg(colors.heading)),
            Span::styled(format!("| {}", app.status), style),
        ]),
    };

    f.render_widget(Paragraph::new(line).style(style), area);
}
