//! Sprinkling dialog popup.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub(super) fn draw_dialog(f: &mut Frame<'_>, app: &App, colors: &ThemeColors) {
    let Some(key) = app.dialog.key() else {
        return;
    };
    let area = centered_rect(40, 7, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Sprinkling for {}", key),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Amount (mm): ", Style::default().fg(colors.label)),
            Span::styled(
                format!("{}\u{2581}", app.dialog.buffer()),
                Style::default().fg(colors.value),
            ),
        ]),
    ];
    if let Some(error) = app.dialog.error() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(colors.error),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(colors.text).bg(colors.bg))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Edit ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.focus)),
        );
    f.render_widget(paragraph, area);
}

/// Popup of `percent_x` width and `height` rows in the middle of `r`.
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
