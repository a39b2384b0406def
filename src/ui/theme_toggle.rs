use crate::app::state::{AppState, FocusPanel};
use crate::ui::palette::Palette;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

fn button_text(state: &AppState) -> String {
    format!("[ {} {} ]", state.theme.icon(), state.theme.label())
}

/// Rect of the toggle button, right-aligned inside the header. Used for
/// both drawing and mouse hit-testing.
pub fn toggle_region(area: Rect, state: &AppState) -> Rect {
    let text = button_text(state);
    let width = (text.width() as u16).min(area.width.saturating_sub(2));
    let x = area.right().saturating_sub(width + 2);
    Rect::new(x, area.y + 1, width, 1)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let focused = state.focus == FocusPanel::Theme;
    let block = Block::default()
        .title(" termdeck ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(if focused {
            palette.border_focused()
        } else {
            palette.border()
        });
    frame.render_widget(block, area);

    let region = toggle_region(area, state);
    let button = Paragraph::new(button_text(state)).style(palette.button(focused));
    frame.render_widget(button, region);
}
