use crate::app::state::{AppState, FocusPanel};
use crate::ui::palette::Palette;
use crate::widgets::counter::CounterOp;
use ratatui::layout::Margin;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

fn button_text(op: CounterOp) -> String {
    format!("[ {} ]", op.label())
}

/// Button rects inside the counter panel, centered on the button row.
/// Shared by the renderer and mouse dispatch.
pub fn button_regions(area: Rect) -> Vec<(CounterOp, Rect)> {
    let inner = area.inner(Margin::new(1, 1));
    if inner.height < 3 {
        return Vec::new();
    }
    let row = inner.y + 2;
    let total: u16 = CounterOp::ALL
        .iter()
        .map(|op| button_text(*op).width() as u16 + 1)
        .sum::<u16>()
        .saturating_sub(1);
    let mut x = inner.x + inner.width.saturating_sub(total) / 2;
    let mut regions = Vec::new();
    for op in CounterOp::ALL {
        let width = button_text(op).width() as u16;
        regions.push((op, Rect::new(x, row, width, 1)));
        x += width + 1;
    }
    regions
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let focused = state.focus == FocusPanel::Counter;
    let block = Block::default()
        .title(" Counter ")
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
    if inner.height < 3 {
        return;
    }

    // Display value, color-coded by sign; pulse inverts it briefly.
    let mut value_style = palette.tone(state.counter.value_tone());
    if state.counter.is_pulsing() {
        value_style = value_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    let display = Paragraph::new(state.counter.value().to_string())
        .style(value_style)
        .alignment(Alignment::Center);
    frame.render_widget(display, Rect::new(inner.x, inner.y, inner.width, 1));

    for (i, (op, region)) in button_regions(area).into_iter().enumerate() {
        let highlighted = focused && state.counter.selected == i;
        let button = Paragraph::new(button_text(op)).style(palette.button(highlighted));
        frame.render_widget(button, region);
    }

    // Transient status message on the last row.
    if inner.height >= 5 {
        if let Some((text, tone)) = state.counter.message() {
            let message = Paragraph::new(text.as_str())
                .style(palette.tone(*tone))
                .alignment(Alignment::Center);
            frame.render_widget(message, Rect::new(inner.x, inner.y + 4, inner.width, 1));
        }
    }
}
