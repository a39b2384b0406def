//! Config file model.
//!
//! Besides UI timings and logging, the config carries the page content —
//! FAQ entries and tab definitions. That content is the external contract
//! the widgets wire themselves onto; the built-in defaults describe the
//! app itself so a bare install still shows a working page.

use crate::widgets::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown theme mode '{0}' (expected 'light' or 'dark')")]
    UnknownTheme(String),
    #[error("duplicate tab id '{0}'")]
    DuplicateTabId(String),
    #[error("at least one tab must be defined")]
    NoTabs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
    pub faq: Vec<FaqEntry>,
    pub tabs: Vec<TabEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme mode at startup; the toggle is never persisted back.
    pub initial_theme: String,
    pub tick_rate_ms: u64,
    pub message_timeout_ms: u64,
    pub pulse_duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// Log directory; empty means the platform data dir.
    pub log_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabEntry {
    pub id: String,
    pub title: String,
    pub body: String,
    /// Marks the tab that starts active. First marked wins; none marked
    /// falls back to the first tab.
    #[serde(default)]
    pub active: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_theme: "light".to_string(),
            tick_rate_ms: 50,
            message_timeout_ms: 3000,
            pulse_duration_ms: 500,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: String::new(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
            faq: vec![
                FaqEntry {
                    question: "How do I move between panels?".to_string(),
                    answer: "Press Tab to cycle focus: theme toggle, counter, FAQ, tabs, \
                             then the note line. The focused panel has a highlighted border."
                        .to_string(),
                },
                FaqEntry {
                    question: "What are the counter shortcuts?".to_string(),
                    answer: "Up or '+' increments, Down or '-' decrements, '*' doubles and \
                             Ctrl+R resets. They work from any panel except the note line."
                        .to_string(),
                },
                FaqEntry {
                    question: "Is anything saved between runs?".to_string(),
                    answer: "No. The theme choice, counter value and open panels live in \
                             memory only and reset on the next start."
                        .to_string(),
                },
            ],
            tabs: vec![
                TabEntry {
                    id: "overview".to_string(),
                    title: "Overview".to_string(),
                    body: "termdeck is a small deck of interactive widgets: a light/dark \
                           theme toggle, a counter game, an FAQ accordion and this tabbed \
                           pane. Each panel is independent; click it or focus it with Tab."
                        .to_string(),
                    active: true,
                },
                TabEntry {
                    id: "shortcuts".to_string(),
                    title: "Shortcuts".to_string(),
                    body: "Tab cycles focus. Enter or Space activates the focused control. \
                           Left/Right move between tabs or counter buttons. j/k move the \
                           FAQ cursor (Up/Down drive the counter). Ctrl+C quits."
                        .to_string(),
                    active: false,
                },
                TabEntry {
                    id: "about".to_string(),
                    title: "About".to_string(),
                    body: "Content on this page comes from config.toml in the termdeck \
                           config directory; edit it to supply your own questions and tabs."
                        .to_string(),
                    active: false,
                },
            ],
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.initial_theme_mode()?;
        if self.tabs.is_empty() {
            return Err(ConfigError::NoTabs);
        }
        let mut seen = HashSet::new();
        for tab in &self.tabs {
            if !seen.insert(tab.id.as_str()) {
                return Err(ConfigError::DuplicateTabId(tab.id.clone()));
            }
        }
        Ok(())
    }

    pub fn initial_theme_mode(&self) -> Result<ThemeMode, ConfigError> {
        match self.ui.initial_theme.as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ConfigError::UnknownTheme(other.to_string())),
        }
    }

    /// Index of the tab marked active, if any.
    pub fn initial_tab(&self) -> Option<usize> {
        self.tabs.iter().position(|t| t.active)
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_millis(self.ui.message_timeout_ms)
    }

    pub fn pulse_duration(&self) -> Duration {
        Duration::from_millis(self.ui.pulse_duration_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }
}
