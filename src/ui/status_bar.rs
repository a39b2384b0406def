use crate::app::state::{AppState, FocusPanel};
use crate::ui::palette::Palette;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        palette.status_bar(),
    ));

    let focus_name = match state.focus {
        FocusPanel::Theme => "THEME",
        FocusPanel::Counter => "COUNTER",
        FocusPanel::Faq => "FAQ",
        FocusPanel::Tabs => "TABS",
        FocusPanel::Note => "NOTE",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), palette.status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        palette.focus_badge(),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
