use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Panel rects for one frame. Mouse dispatch hit-tests against the same
/// rects the renderers draw into.
pub struct AppLayout {
    pub header: Rect,
    pub counter: Rect,
    pub faq: Rect,
    pub tabs: Rect,
    pub note: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Vertical: header | content | note line | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with theme toggle
            Constraint::Min(8),    // Widget panels
            Constraint::Length(3), // Note input
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = main_chunks[0];
    let content = main_chunks[1];
    let note = main_chunks[2];
    let status_bar = main_chunks[3];

    // Horizontal: left column (counter + FAQ) | right column (tabs)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Left column
            Constraint::Min(30),        // Tabbed pane
        ])
        .split(content);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Counter panel
            Constraint::Min(4),    // FAQ accordion
        ])
        .split(h_chunks[0]);

    AppLayout {
        header,
        counter: left_chunks[0],
        faq: left_chunks[1],
        tabs: h_chunks[1],
        note,
        status_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_panels_fit_a_normal_terminal() {
        let layout = compute_layout(Rect::new(0, 0, 100, 30));
        for rect in [
            layout.header,
            layout.counter,
            layout.faq,
            layout.tabs,
            layout.note,
            layout.status_bar,
        ] {
            assert!(rect.width > 0 && rect.height > 0);
        }
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.counter.height, 7);
    }
}
