use crate::app::state::{AppState, FocusPanel};
use crate::ui::palette::Palette;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let focused = state.focus == FocusPanel::Note;
    let block = Block::default()
        .title(" Note ")
        .title_style(if focused {
            palette.title()
        } else {
            palette.border()
        })
        .borders(Borders::ALL)
        .border_style(if focused {
            palette.border_focused()
        } else {
            palette.border()
        })
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if focused {
        let line = Line::from(vec![
            Span::styled("❯ ", palette.border_focused()),
            Span::styled(state.note.text.as_str(), palette.text()),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        // Cursor offset: padding(1) + chevron "❯ " (2 chars)
        let prompt_offset = 2u16;
        let cursor_x = inner.x + prompt_offset + state.note.cursor as u16;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    } else {
        let paragraph = Paragraph::new(state.note.text.as_str()).style(palette.muted());
        frame.render_widget(paragraph, inner);
    }
}
