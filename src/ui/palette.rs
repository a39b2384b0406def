//! Theme palettes.
//!
//! The page-wide analog of a `data-theme` attribute: one `Palette` per
//! theme mode, and every renderer draws through the one selected by the
//! current mode. The named tones (success, error, warning, accent) resolve
//! to theme-appropriate colors here.

use crate::widgets::counter::Tone;
use crate::widgets::theme::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

pub struct Palette {
    fg: Color,
    bg: Color,
    muted: Color,
    border: Color,
    focus: Color,
    success: Color,
    error: Color,
    warning: Color,
    accent: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                muted: Color::DarkGray,
                border: Color::Gray,
                focus: Color::Blue,
                success: Color::Green,
                error: Color::Red,
                warning: Color::Magenta,
                accent: Color::Blue,
            },
            ThemeMode::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                muted: Color::Gray,
                border: Color::DarkGray,
                focus: Color::Cyan,
                success: Color::LightGreen,
                error: Color::LightRed,
                warning: Color::Yellow,
                accent: Color::Cyan,
            },
        }
    }

    /// Page background; painted across the whole frame first.
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.focus).add_modifier(Modifier::BOLD)
    }

    pub fn tone(&self, tone: Tone) -> Style {
        let color = match tone {
            Tone::Success => self.success,
            Tone::Error => self.error,
            Tone::Warning => self.warning,
            Tone::Accent => self.accent,
        };
        Style::default().fg(color)
    }

    /// Button face; highlighted when it is the one activation would hit.
    pub fn button(&self, highlighted: bool) -> Style {
        if highlighted {
            Style::default()
                .fg(self.bg)
                .bg(self.focus)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.fg)
        }
    }

    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn status_bar(&self) -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn focus_badge(&self) -> Style {
        Style::default().fg(self.focus).bg(Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_resolve_per_mode() {
        let light = Palette::for_mode(ThemeMode::Light);
        let dark = Palette::for_mode(ThemeMode::Dark);
        assert_ne!(light.tone(Tone::Success), dark.tone(Tone::Success));
        assert_ne!(light.base(), dark.base());
        assert_ne!(light.tone(Tone::Error), light.tone(Tone::Accent));
    }
}
