use crate::app::event::AppEvent;
use crate::app::state::{AppState, FocusPanel};
use crate::ui;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent);
        }
        AppEvent::Tick => {
            if state.counter.on_tick(Instant::now()) {
                state.dirty = true;
            }
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(w, h) => {
            state.term_size = (w, h);
        }
        _ => {}
    }
}

pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }
    if key.code == KeyCode::Tab {
        state.cycle_focus();
        return;
    }

    // The note line owns every keystroke while focused; this is what keeps
    // '+', '-' and '*' typeable.
    if state.focus.captures_typing() {
        handle_note_key(state, key);
        return;
    }

    // Counter shortcuts work from any other panel.
    let now = Instant::now();
    match key.code {
        KeyCode::Up | KeyCode::Char('+') => {
            state.counter.increment(now);
            return;
        }
        KeyCode::Down | KeyCode::Char('-') => {
            state.counter.decrement(now);
            return;
        }
        KeyCode::Char('*') => {
            state.counter.double(now);
            return;
        }
        KeyCode::Char('r') | KeyCode::Char('R')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            state.counter.reset(now);
            return;
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Theme => handle_theme_key(state, key),
        FocusPanel::Counter => handle_counter_key(state, key, now),
        FocusPanel::Faq => handle_faq_key(state, key),
        FocusPanel::Tabs => handle_tabs_key(state, key),
        FocusPanel::Note => {}
    }
}

fn handle_theme_key(state: &mut AppState, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
        state.theme.toggle();
    }
}

fn handle_counter_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Left => state.counter.select_prev(),
        KeyCode::Right => state.counter.select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let op = state.counter.selected_op();
            state.counter.apply(op, now);
        }
        _ => {}
    }
}

fn handle_faq_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        // Up/Down belong to the counter shortcuts, so the cursor moves vi-style.
        KeyCode::Char('j') => state.faq.cursor_down(),
        KeyCode::Char('k') => state.faq.cursor_up(),
        KeyCode::Enter | KeyCode::Char(' ') => state.faq.activate_cursor(),
        _ => {}
    }
}

fn handle_tabs_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Left => state.tabs.prev(),
        KeyCode::Right => state.tabs.next(),
        KeyCode::Enter | KeyCode::Char(' ') => state.tabs.activate_cursor(),
        _ => {}
    }
}

fn handle_note_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => state.note.clear(),
        KeyCode::Backspace => state.note.delete_back(),
        KeyCode::Delete => state.note.delete_forward(),
        KeyCode::Left => state.note.move_left(),
        KeyCode::Right => state.note.move_right(),
        KeyCode::Home => state.note.move_home(),
        KeyCode::End => state.note.move_end(),
        KeyCode::Char(c) => state.note.insert_char(c),
        _ => {}
    }
}

/// Route a left press to the panel under the pointer using the same layout
/// geometry the renderers draw with.
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let (width, height) = state.term_size;
    let area = Rect::new(0, 0, width, height);
    let pos = Position::new(mouse.column, mouse.row);
    let app_layout = ui::layout::compute_layout(area);
    let now = Instant::now();

    if app_layout.header.contains(pos) {
        state.focus = FocusPanel::Theme;
        if ui::theme_toggle::toggle_region(app_layout.header, state).contains(pos) {
            state.theme.toggle();
        }
    } else if app_layout.counter.contains(pos) {
        state.focus = FocusPanel::Counter;
        for (i, (op, region)) in ui::counter::button_regions(app_layout.counter)
            .into_iter()
            .enumerate()
        {
            if region.contains(pos) {
                state.counter.selected = i;
                state.counter.apply(op, now);
                break;
            }
        }
    } else if app_layout.faq.contains(pos) {
        state.focus = FocusPanel::Faq;
        if let Some(index) = ui::faq::question_at(app_layout.faq, &state.faq, pos) {
            state.faq.cursor = index;
            state.faq.activate(index);
        }
    } else if app_layout.tabs.contains(pos) {
        state.focus = FocusPanel::Tabs;
        if let Some(id) = ui::tabs::tab_at(app_layout.tabs, &state.tabs, pos) {
            state.tabs.switch_tab(&id);
        }
    } else if app_layout.note.contains(pos) {
        state.focus = FocusPanel::Note;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::widgets::theme::ThemeMode;

    fn state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.term_size = (100, 30);
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn enter_on_focused_theme_toggles() {
        let mut s = state();
        assert_eq!(s.focus, FocusPanel::Theme);
        handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.theme.mode(), ThemeMode::Dark);
        handle_key(&mut s, key(KeyCode::Char(' ')));
        assert_eq!(s.theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn counter_shortcuts_work_from_any_panel() {
        let mut s = state();
        s.focus = FocusPanel::Faq;
        handle_key(&mut s, key(KeyCode::Char('+')));
        handle_key(&mut s, key(KeyCode::Up));
        assert_eq!(s.counter.value(), 2);
        s.focus = FocusPanel::Tabs;
        handle_key(&mut s, key(KeyCode::Char('*')));
        assert_eq!(s.counter.value(), 4);
        handle_key(&mut s, ctrl('r'));
        assert_eq!(s.counter.value(), 0);
        handle_key(&mut s, key(KeyCode::Down));
        assert_eq!(s.counter.value(), -1);
    }

    #[test]
    fn note_focus_suppresses_counter_shortcuts() {
        let mut s = state();
        s.focus = FocusPanel::Note;
        handle_key(&mut s, key(KeyCode::Char('+')));
        handle_key(&mut s, key(KeyCode::Char('-')));
        handle_key(&mut s, key(KeyCode::Char('*')));
        assert_eq!(s.counter.value(), 0);
        assert_eq!(s.note.text, "+-*");
        handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.note.text, "");
    }

    #[test]
    fn plain_r_does_not_reset() {
        let mut s = state();
        s.focus = FocusPanel::Counter;
        handle_key(&mut s, key(KeyCode::Char('+')));
        handle_key(&mut s, key(KeyCode::Char('r')));
        assert_eq!(s.counter.value(), 1);
    }

    #[test]
    fn arrow_left_on_first_tab_wraps_to_last() {
        let mut s = state();
        s.focus = FocusPanel::Tabs;
        assert_eq!(s.tabs.active_index(), 0);
        handle_key(&mut s, key(KeyCode::Left));
        let last = s.tabs.tabs().len() - 1;
        assert_eq!(s.tabs.active_index(), last);
        assert_eq!(s.tabs.cursor, last);
        handle_key(&mut s, key(KeyCode::Right));
        assert_eq!(s.tabs.active_index(), 0);
    }

    #[test]
    fn arrows_do_not_switch_tabs_without_tab_focus() {
        let mut s = state();
        s.focus = FocusPanel::Theme;
        handle_key(&mut s, key(KeyCode::Left));
        assert_eq!(s.tabs.active_index(), 0);
    }

    #[test]
    fn faq_cursor_and_activation() {
        let mut s = state();
        s.focus = FocusPanel::Faq;
        handle_key(&mut s, key(KeyCode::Char('j')));
        handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.faq.expanded_index(), Some(1));
        handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.faq.expanded_index(), None);
    }

    #[test]
    fn tab_key_cycles_focus_and_ctrl_c_quits() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Tab));
        assert_eq!(s.focus, FocusPanel::Counter);
        handle_key(&mut s, ctrl('c'));
        assert!(s.should_quit);
    }

    #[test]
    fn click_on_toggle_button_flips_theme() {
        let mut s = state();
        let area = Rect::new(0, 0, 100, 30);
        let app_layout = ui::layout::compute_layout(area);
        let region = ui::theme_toggle::toggle_region(app_layout.header, &s);
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: region.x + 1,
            row: region.y,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut s, mouse);
        assert_eq!(s.theme.mode(), ThemeMode::Dark);
        assert_eq!(s.focus, FocusPanel::Theme);
    }

    #[test]
    fn click_on_counter_button_applies_its_op() {
        let mut s = state();
        let area = Rect::new(0, 0, 100, 30);
        let app_layout = ui::layout::compute_layout(area);
        let regions = ui::counter::button_regions(app_layout.counter);
        let (_, double_region) = regions[2];
        handle_key(&mut s, key(KeyCode::Char('+')));
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: double_region.x,
            row: double_region.y,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut s, mouse);
        assert_eq!(s.counter.value(), 2);
        assert_eq!(s.focus, FocusPanel::Counter);
    }
}
