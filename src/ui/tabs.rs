use crate::app::state::{AppState, FocusPanel};
use crate::ui::palette::Palette;
use crate::widgets::tabs::TabbedInterface;
use ratatui::layout::{Margin, Position};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

fn title_text(title: &str) -> String {
    format!(" {} ", title)
}

/// Map a click on the tab bar to the id of the tab title under it.
pub fn tab_at(area: Rect, tabs: &TabbedInterface, pos: Position) -> Option<String> {
    let inner = area.inner(Margin::new(1, 1));
    if inner.height == 0 || pos.y != inner.y {
        return None;
    }
    let mut x = inner.x;
    for tab in tabs.tabs() {
        let width = title_text(&tab.title).width() as u16;
        if pos.x >= x && pos.x < x + width {
            return Some(tab.id.clone());
        }
        x += width + 1;
    }
    None
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let focused = state.focus == FocusPanel::Tabs;
    let block = Block::default()
        .title(" Tabs ")
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
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    // Tab bar: one styled span per title.
    let mut spans: Vec<Span> = Vec::new();
    for (index, tab) in state.tabs.tabs().iter().enumerate() {
        let style = if index == state.tabs.active_index() {
            palette.tab_active()
        } else if focused && index == state.tabs.cursor {
            palette.button(true)
        } else {
            palette.tab_inactive()
        };
        spans.push(Span::styled(title_text(&tab.title), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    // Active pane body below a separator row.
    if inner.height > 2 {
        if let Some(tab) = state.tabs.active_tab() {
            let body_area = Rect::new(
                inner.x,
                inner.y + 2,
                inner.width,
                inner.height - 2,
            );
            let body = Paragraph::new(tab.body.as_str())
                .style(palette.text())
                .wrap(Wrap { trim: true });
            frame.render_widget(body, body_area);
        }
    }
}
