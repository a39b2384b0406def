use crate::app::state::{AppState, FocusPanel};
use crate::ui::palette::Palette;
use crate::widgets::faq::FaqAccordion;
use ratatui::layout::{Margin, Position};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Greedy word wrap. The accordion renders from these lines and the mouse
/// dispatch counts them, so both always agree on row positions.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let width = width as usize;
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn answer_width(inner: Rect) -> u16 {
    inner.width.saturating_sub(2)
}

/// Map a click position to the question it landed on. Clicks on answer
/// rows (or outside any item) resolve to nothing, like a click that misses
/// every question element.
pub fn question_at(area: Rect, faq: &FaqAccordion, pos: Position) -> Option<usize> {
    let inner = area.inner(Margin::new(1, 1));
    if !inner.contains(pos) {
        return None;
    }
    let rel = pos.y - inner.y;
    let mut row = 0u16;
    for (index, item) in faq.items().iter().enumerate() {
        if rel == row {
            return Some(index);
        }
        let mut height = 1;
        if item.expanded {
            height += wrap(&item.answer, answer_width(inner)).len() as u16;
        }
        if rel < row + height {
            return None;
        }
        row += height;
    }
    None
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let focused = state.focus == FocusPanel::Faq;
    let block = Block::default()
        .title(" FAQ ")
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

    let mut lines: Vec<Line> = Vec::new();
    for (index, item) in state.faq.items().iter().enumerate() {
        let question_style = if focused && state.faq.cursor == index {
            palette.button(true)
        } else if item.expanded {
            palette.title()
        } else {
            palette.text()
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}", item.indicator(), item.question),
            question_style,
        )));
        if item.expanded {
            for wrapped in wrap(&item.answer, answer_width(inner)) {
                lines.push(Line::from(Span::styled(
                    format!("  {}", wrapped),
                    palette.muted(),
                )));
            }
        }
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::faq::FaqItem;

    fn faq() -> FaqAccordion {
        FaqAccordion::new(vec![
            FaqItem::new("first question", "short answer"),
            FaqItem::new("second question", "a much longer answer that will wrap"),
        ])
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        assert!(wrap("anything", 0).is_empty());
    }

    #[test]
    fn click_rows_follow_expansion() {
        let area = Rect::new(0, 0, 30, 10);
        let mut faq = faq();
        // Collapsed: questions sit on consecutive rows.
        assert_eq!(question_at(area, &faq, Position::new(2, 1)), Some(0));
        assert_eq!(question_at(area, &faq, Position::new(2, 2)), Some(1));
        // Expanding the first pushes the second down by its answer rows.
        faq.activate(0);
        assert_eq!(question_at(area, &faq, Position::new(2, 1)), Some(0));
        assert_eq!(question_at(area, &faq, Position::new(2, 2)), None);
        let answer_rows = wrap("short answer", 26).len() as u16;
        assert_eq!(
            question_at(area, &faq, Position::new(2, 2 + answer_rows)),
            Some(1)
        );
    }

    #[test]
    fn clicks_outside_the_panel_miss() {
        let area = Rect::new(0, 0, 30, 10);
        let faq = faq();
        assert_eq!(question_at(area, &faq, Position::new(0, 0)), None);
        assert_eq!(question_at(area, &faq, Position::new(2, 8)), None);
    }
}
