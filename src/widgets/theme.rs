//! Light/dark theme toggle.
//!
//! A two-state machine. The active mode selects the palette every renderer
//! draws through, so flipping it restyles the whole page at the next frame.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

pub struct ThemeManager {
    mode: ThemeMode,
    // In-memory stand-in for a saved preference; recorded, never persisted.
    #[allow(dead_code)]
    preference: ThemeMode,
}

impl ThemeManager {
    pub fn new(initial: ThemeMode) -> Self {
        let mut mgr = Self {
            mode: initial,
            preference: initial,
        };
        mgr.set_mode(initial);
        mgr
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip to the other mode. Total, no error cases.
    pub fn toggle(&mut self) {
        let next = match self.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.set_mode(next);
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.preference = mode;
        debug!("theme changed to: {}", mode.as_str());
    }

    /// Glyph shown on the toggle button: the mode the button switches to.
    pub fn icon(&self) -> &'static str {
        match self.mode {
            ThemeMode::Light => "☾",
            ThemeMode::Dark => "☀",
        }
    }

    /// Action label on the toggle button, named after the target mode.
    pub fn label(&self) -> &'static str {
        match self.mode {
            ThemeMode::Light => "Dark Mode",
            ThemeMode::Dark => "Light Mode",
        }
    }
}
