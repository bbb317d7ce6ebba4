//! Terminal colors for the heatmap scale.

use crate::raster::{ColorScale, Rgb};
use ratatui::{style::Color, style::Style, text::Span};

/// Terminal color of a scale color.
pub fn terminal_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Terminal color for a cell value, `None` for absent values.
pub fn cell_color(scale: &ColorScale, value: f64) -> Option<Color> {
    scale.color(value).map(terminal_color)
}

/// Legend strip: `steps` blocks sampled evenly from the scale.
pub fn legend_spans(scale: &ColorScale, steps: usize) -> Vec<Span<'static>> {
    let steps = steps.max(2);
    (0..steps)
        .map(|i| {
            let t = i as f64 / (steps - 1) as f64;
            Span::styled(
                "\u{2588}",
                Style::default().fg(terminal_color(scale.color_at(t))),
            )
        })
        .collect()
}
