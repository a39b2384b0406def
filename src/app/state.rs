use crate::app::input::NoteInput;
use crate::config::AppConfig;
use crate::widgets::counter::CounterGame;
use crate::widgets::faq::{FaqAccordion, FaqItem};
use crate::widgets::tabs::{Tab, TabbedInterface};
use crate::widgets::theme::{ThemeManager, ThemeMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Theme,
    Counter,
    Faq,
    Tabs,
    Note,
}

impl FocusPanel {
    /// Whether the focused panel consumes typed characters. Global counter
    /// shortcuts are suppressed while this is true.
    pub fn captures_typing(&self) -> bool {
        matches!(self, FocusPanel::Note)
    }
}

pub struct AppState {
    pub theme: ThemeManager,
    pub counter: CounterGame,
    pub faq: FaqAccordion,
    pub tabs: TabbedInterface,
    pub note: NoteInput,
    pub focus: FocusPanel,
    pub term_size: (u16, u16),
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        // Config is validated at load; an odd mode here still gets a page.
        let mode = config.initial_theme_mode().unwrap_or(ThemeMode::Light);
        let theme = ThemeManager::new(mode);
        let counter = CounterGame::new(config.message_timeout(), config.pulse_duration());
        let faq = FaqAccordion::new(
            config
                .faq
                .iter()
                .map(|entry| FaqItem::new(entry.question.clone(), entry.answer.clone()))
                .collect(),
        );
        let tabs = TabbedInterface::new(
            config
                .tabs
                .iter()
                .map(|entry| Tab {
                    id: entry.id.clone(),
                    title: entry.title.clone(),
                    body: entry.body.clone(),
                })
                .collect(),
            config.initial_tab(),
        );
        Self {
            theme,
            counter,
            faq,
            tabs,
            note: NoteInput::new(),
            focus: FocusPanel::Theme,
            term_size: (0, 0),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Theme => FocusPanel::Counter,
            FocusPanel::Counter => FocusPanel::Faq,
            FocusPanel::Faq => FocusPanel::Tabs,
            FocusPanel::Tabs => FocusPanel::Note,
            FocusPanel::Note => FocusPanel::Theme,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        let tab = self
            .tabs
            .active_tab()
            .map(|t| t.title.as_str())
            .unwrap_or("-");
        format!(
            "Theme: {} | Counter: {} | Tab: {}",
            self.theme.mode().as_str(),
            self.counter.value(),
            tab
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_wires_all_four_components() {
        let state = AppState::new(AppConfig::default());
        assert_eq!(state.theme.mode(), ThemeMode::Light);
        assert_eq!(state.counter.value(), 0);
        assert!(!state.faq.items().is_empty());
        assert!(state.tabs.active_tab().is_some());
    }

    #[test]
    fn focus_cycles_through_every_panel() {
        let mut state = AppState::new(AppConfig::default());
        let start = state.focus;
        let mut seen = vec![start];
        for _ in 0..4 {
            state.cycle_focus();
            seen.push(state.focus);
        }
        state.cycle_focus();
        assert_eq!(state.focus, start);
        seen.dedup();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn only_note_captures_typing() {
        assert!(FocusPanel::Note.captures_typing());
        assert!(!FocusPanel::Counter.captures_typing());
        assert!(!FocusPanel::Faq.captures_typing());
    }

    #[test]
    fn status_line_reflects_state() {
        let state = AppState::new(AppConfig::default());
        let line = state.status_line();
        assert!(line.contains("Theme: light"));
        assert!(line.contains("Counter: 0"));
    }
}
