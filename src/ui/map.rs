//! Heatmap of the current layer with the map cursor.

use crate::app::{App, Focus};
use crate::data::PlotFeature;
use crate::geometry::PixelIndex;
use crate::selection::Selection;
use crate::ui::formatters::format_optional;
use crate::ui::ThemeColors;
use crate::util::colormaps::{cell_color, legend_spans};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// First index of a window of `visible` items keeping `cursor` centered.
fn window_start(cursor: usize, visible: usize, len: usize) -> usize {
    if len <= visible {
        return 0;
    }
    cursor.saturating_sub(visible / 2).min(len - visible)
}

pub(super) fn draw_map(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let border = if app.focus == Focus::Map {
        colors.focus
    } else {
        colors.border
    };
    let block = Block::default()
        .title(format!(" {} | {} ", app.metric.name(), app.date))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let grid = &app.data.grid;
    let cell_width = app.layout.map.cell_width.max(1);
    let rows = (inner.height.saturating_sub(1) as usize).min(grid.height());
    let cols = (inner.width as usize / cell_width).min(grid.width());
    if rows == 0 || cols == 0 {
        return;
    }

    let first_row = window_start(app.cursor.row, rows, grid.height());
    let first_col = window_start(app.cursor.col, cols, grid.width());
    let day = app.data.pixel_day(&app.date);
    let selected_plot: Option<&PlotFeature> = match app.selection.selection() {
        Selection::Plot(id) => app.data.plot(id),
        _ => None,
    };
    let selected_pixel = match app.selection.selection() {
        Selection::Pixel(index) => Some(*index),
        _ => None,
    };

    let mut lines = Vec::with_capacity(rows + 1);
    // North up: the top line shows the highest row of the window.
    for y in 0..rows {
        let row = first_row + rows - 1 - y;
        let spans: Vec<Span<'_>> = (first_col..first_col + cols)
            .map(|col| {
                let index = PixelIndex::new(row, col);
                let value = day
                    .and_then(|d| d.value(app.metric, index))
                    .unwrap_or(f64::NAN);
                let color = cell_color(&app.scale, value);

                let (symbol, mut style) = match color {
                    Some(c) => ("\u{2588}", Style::default().fg(c)),
                    None => ("\u{00b7}", Style::default().fg(colors.empty_cell)),
                };
                let in_plot = selected_plot.is_some_and(|p| p.contains(app.cell_point(index)));
                let symbol = if selected_pixel == Some(index) {
                    style = style.fg(colors.selected);
                    "\u{25c6}"
                } else if in_plot {
                    style = style.add_modifier(Modifier::BOLD).fg(colors.selected);
                    "\u{2593}"
                } else {
                    symbol
                };
                if index == app.cursor {
                    style = style.fg(colors.cursor_fg).bg(colors.cursor_bg);
                }
                Span::styled(symbol.repeat(cell_width), style)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let (min, max) = app.scale.domain();
    let under_cursor = day.and_then(|d| d.value(app.metric, app.cursor));
    let mut legend = vec![Span::styled(
        format!("{:.0} ", min),
        Style::default().fg(colors.label),
    )];
    legend.extend(legend_spans(&app.scale, app.layout.map.legend_steps));
    legend.push(Span::styled(
        format!(" {:.0} mm | ", max),
        Style::default().fg(colors.label),
    ));
    legend.push(Span::styled(
        format!("{} = {}", app.cursor, format_optional(under_cursor)),
        Style::default().fg(colors.value),
    ));
    lines.push(Line::from(legend));

    let paragraph = Paragraph::new(lines).style(Style::default().fg(colors.text).bg(colors.bg));
    f.render_widget(paragraph, inner);
}
