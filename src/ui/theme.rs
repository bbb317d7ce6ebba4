//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Value text color.
    pub value: Color,
    /// Border color.
    pub border: Color,
    /// Border color of the focused panel.
    pub focus: Color,
    /// Map cursor and table highlight foreground.
    pub cursor_fg: Color,
    /// Map cursor and table highlight background.
    pub cursor_bg: Color,
    /// Marker of the selected pixel or plot.
    pub selected: Color,
    /// Cells without data.
    pub empty_cell: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Deficit series.
    pub deficit: Color,
    /// Soil moisture series.
    pub moisture: Color,
    /// Sprinkling series.
    pub sprinkling: Color,
    /// Error color.
    pub error: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::Field => Self {
                bg: Color::Rgb(29, 32, 33),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(250, 189, 47),
                label: Color::Rgb(184, 187, 38),
                value: Color::Rgb(142, 192, 124),
                border: Color::Rgb(80, 73, 69),
                focus: Color::Rgb(131, 165, 152),
                cursor_fg: Color::Rgb(29, 32, 33),
                cursor_bg: Color::Rgb(250, 189, 47),
                selected: Color::Rgb(254, 128, 25),
                empty_cell: Color::Rgb(60, 56, 54),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(50, 48, 47),
                deficit: Color::Rgb(251, 73, 52),
                moisture: Color::Rgb(131, 165, 152),
                sprinkling: Color::Rgb(33, 150, 243),
                error: Color::Rgb(251, 73, 52),
            },
            Theme::Paper => Self {
                bg: Color::Rgb(251, 241, 199),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(121, 116, 14),
                label: Color::Rgb(7, 102, 120),
                value: Color::Rgb(66, 123, 88),
                border: Color::Rgb(189, 174, 147),
                focus: Color::Rgb(7, 102, 120),
                cursor_fg: Color::Rgb(251, 241, 199),
                cursor_bg: Color::Rgb(175, 58, 3),
                selected: Color::Rgb(214, 93, 14),
                empty_cell: Color::Rgb(213, 196, 161),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                deficit: Color::Rgb(157, 0, 6),
                moisture: Color::Rgb(7, 102, 120),
                sprinkling: Color::Rgb(21, 101, 192),
                error: Color::Rgb(157, 0, 6),
            },
        }
    }
}
