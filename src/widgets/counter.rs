//! Interactive counter game.
//!
//! One signed integer and four total operations. Every operation updates the
//! display value, classifies it for color, shows a transient status message,
//! and starts a short pulse on the display. Message and pulse clears are
//! fire-and-forget deadlines drained on tick; a new operation does not cancel
//! a pending clear, so an early clear under a newer message can happen and is
//! harmless (each clear rewrites the same field).

use std::time::{Duration, Instant};

/// Color classification for the display value and status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    /// Neutral; drawn in the palette's accent color.
    Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterOp {
    Increment,
    Decrement,
    Double,
    Reset,
}

impl CounterOp {
    pub const ALL: [CounterOp; 4] = [
        CounterOp::Increment,
        CounterOp::Decrement,
        CounterOp::Double,
        CounterOp::Reset,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CounterOp::Increment => "+1",
            CounterOp::Decrement => "-1",
            CounterOp::Double => "x2",
            CounterOp::Reset => "Reset",
        }
    }
}

pub struct CounterGame {
    value: i64,
    // Recorded per operation but never read; reserved for a future undo.
    #[allow(dead_code)]
    history: Vec<i64>,
    message: Option<(String, Tone)>,
    message_clears: Vec<Instant>,
    pulsing: bool,
    pulse_clears: Vec<Instant>,
    message_timeout: Duration,
    pulse_duration: Duration,
    /// Which of the four buttons the panel cursor is on.
    pub selected: usize,
}

impl CounterGame {
    pub fn new(message_timeout: Duration, pulse_duration: Duration) -> Self {
        Self {
            value: 0,
            history: Vec::new(),
            message: None,
            message_clears: Vec::new(),
            pulsing: false,
            pulse_clears: Vec::new(),
            message_timeout,
            pulse_duration,
            selected: 0,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn message(&self) -> Option<&(String, Tone)> {
        self.message.as_ref()
    }

    pub fn is_pulsing(&self) -> bool {
        self.pulsing
    }

    /// Color classification of the current value.
    pub fn value_tone(&self) -> Tone {
        if self.value > 0 {
            Tone::Success
        } else if self.value < 0 {
            Tone::Error
        } else {
            Tone::Accent
        }
    }

    pub fn apply(&mut self, op: CounterOp, now: Instant) {
        match op {
            CounterOp::Increment => self.increment(now),
            CounterOp::Decrement => self.decrement(now),
            CounterOp::Double => self.double(now),
            CounterOp::Reset => self.reset(now),
        }
    }

    pub fn increment(&mut self, now: Instant) {
        self.value = self.value.saturating_add(1);
        self.history.push(self.value);
        self.show_message(format!("+1! Current: {}", self.value), Tone::Success, now);
        self.start_pulse(now);
    }

    pub fn decrement(&mut self, now: Instant) {
        self.value = self.value.saturating_sub(1);
        self.history.push(self.value);
        self.show_message(format!("-1! Current: {}", self.value), Tone::Accent, now);
        self.start_pulse(now);
    }

    pub fn double(&mut self, now: Instant) {
        let old = self.value;
        self.value = self.value.saturating_mul(2);
        self.history.push(self.value);
        self.show_message(
            format!("Doubled from {} to {}!", old, self.value),
            Tone::Success,
            now,
        );
        self.start_pulse(now);
    }

    pub fn reset(&mut self, now: Instant) {
        let old = self.value;
        self.value = 0;
        self.history.push(self.value);
        self.show_message(format!("Reset from {} to 0", old), Tone::Warning, now);
        self.start_pulse(now);
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % CounterOp::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = if self.selected == 0 {
            CounterOp::ALL.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn selected_op(&self) -> CounterOp {
        CounterOp::ALL[self.selected]
    }

    fn show_message(&mut self, text: String, tone: Tone, now: Instant) {
        self.message = Some((text, tone));
        self.message_clears.push(now + self.message_timeout);
    }

    fn start_pulse(&mut self, now: Instant) {
        self.pulsing = true;
        self.pulse_clears.push(now + self.pulse_duration);
    }

    /// Drain expired clear deadlines. Returns true if anything changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        let before = self.message_clears.len();
        self.message_clears.retain(|deadline| *deadline > now);
        if self.message_clears.len() != before {
            changed |= self.message.take().is_some();
        }
        let before = self.pulse_clears.len();
        self.pulse_clears.retain(|deadline| *deadline > now);
        if self.pulse_clears.len() != before && self.pulsing {
            self.pulsing = false;
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> CounterGame {
        CounterGame::new(Duration::from_secs(3), Duration::from_millis(500))
    }

    #[test]
    fn operations_are_total_transitions() {
        let mut g = game();
        let now = Instant::now();
        g.increment(now);
        assert_eq!(g.value(), 1);
        g.decrement(now);
        assert_eq!(g.value(), 0);
        g.decrement(now);
        assert_eq!(g.value(), -1);
        g.double(now);
        assert_eq!(g.value(), -2);
        g.reset(now);
        assert_eq!(g.value(), 0);
    }

    #[test]
    fn increment_and_decrement_are_inverses() {
        let mut g = game();
        let now = Instant::now();
        for _ in 0..5 {
            g.increment(now);
        }
        for _ in 0..5 {
            g.decrement(now);
        }
        assert_eq!(g.value(), 0);
    }

    #[test]
    fn value_tone_classification() {
        let mut g = game();
        let now = Instant::now();
        assert_eq!(g.value_tone(), Tone::Accent);
        g.increment(now);
        assert_eq!(g.value_tone(), Tone::Success);
        g.decrement(now);
        g.decrement(now);
        assert_eq!(g.value_tone(), Tone::Error);
    }

    #[test]
    fn scenario_increment_double_reset() {
        let mut g = game();
        let now = Instant::now();
        g.increment(now);
        assert_eq!(g.value(), 1);
        assert_eq!(
            g.message(),
            Some(&("+1! Current: 1".to_string(), Tone::Success))
        );
        g.double(now);
        assert_eq!(g.value(), 2);
        assert_eq!(
            g.message(),
            Some(&("Doubled from 1 to 2!".to_string(), Tone::Success))
        );
        g.reset(now);
        assert_eq!(g.value(), 0);
        assert_eq!(
            g.message(),
            Some(&("Reset from 2 to 0".to_string(), Tone::Warning))
        );
    }

    #[test]
    fn message_clears_after_timeout() {
        let mut g = game();
        let t0 = Instant::now();
        g.increment(t0);
        assert!(g.message().is_some());
        assert!(!g.on_tick(t0 + Duration::from_secs(2)));
        assert!(g.message().is_some());
        assert!(g.on_tick(t0 + Duration::from_secs(4)));
        assert!(g.message().is_none());
    }

    #[test]
    fn pulse_clears_after_duration() {
        let mut g = game();
        let t0 = Instant::now();
        g.increment(t0);
        assert!(g.is_pulsing());
        g.on_tick(t0 + Duration::from_millis(600));
        assert!(!g.is_pulsing());
    }

    #[test]
    fn overlapping_timers_are_not_coalesced() {
        let mut g = game();
        let t0 = Instant::now();
        g.increment(t0);
        // Second operation one second later schedules its own clear.
        g.increment(t0 + Duration::from_secs(1));
        // The first deadline fires and clears the newer message early.
        assert!(g.on_tick(t0 + Duration::from_millis(3100)));
        assert!(g.message().is_none());
        // The second deadline still fires; clearing again is a no-op.
        assert!(!g.on_tick(t0 + Duration::from_millis(4100)));
    }

    #[test]
    fn button_selection_wraps() {
        let mut g = game();
        assert_eq!(g.selected_op(), CounterOp::Increment);
        g.select_prev();
        assert_eq!(g.selected_op(), CounterOp::Reset);
        g.select_next();
        assert_eq!(g.selected_op(), CounterOp::Increment);
    }
}
