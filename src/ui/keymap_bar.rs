//! Keymap help bar UI component.

use crate::app::{App, Focus};
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let keymap_text = if app.dialog.is_open() {
        "0-9/.:amount | Backspace:delete | Enter:save | Esc:cancel"
    } else if app.focus == Focus::Plots {
        "jk/↑↓:nav | Enter:select plot | Tab:map | []:day | s:sprinkling | Esc:clear | q:quit"
    } else {
        "hjkl:move | Enter:pixel | p:plot | Tab:plots | m:layer | []:day | s:sprinkling | y:copy overlay | T:theme | q:quit"
    };

    let paragraph = Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
