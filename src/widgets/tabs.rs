//! Tabbed content switcher.
//!
//! Exactly one tab is active at all times after construction. Switching by
//! an id that matches no tab is a silent no-op, which keeps a stale or
//! mistyped id from ever faulting the panel. Arrow navigation moves the
//! cursor to the cyclically adjacent tab and activates it in the same step.

#[derive(Debug, Clone)]
pub struct Tab {
    pub id: String,
    pub title: String,
    pub body: String,
}

pub struct TabbedInterface {
    tabs: Vec<Tab>,
    active: usize,
    /// Which tab title the key cursor is on; follows activation.
    pub cursor: usize,
}

impl TabbedInterface {
    /// Construct with `initial` marking which tab starts active; falls back
    /// to the first tab.
    pub fn new(tabs: Vec<Tab>, initial: Option<usize>) -> Self {
        let active = initial.filter(|i| *i < tabs.len()).unwrap_or(0);
        Self {
            tabs,
            active,
            cursor: active,
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.get(self.active)
    }

    /// Activate the tab carrying `target_id`. Unknown ids leave everything
    /// unchanged.
    pub fn switch_tab(&mut self, target_id: &str) {
        if let Some(index) = self.tabs.iter().position(|t| t.id == target_id) {
            self.active = index;
            self.cursor = index;
        }
    }

    pub fn activate_cursor(&mut self) {
        if self.cursor < self.tabs.len() {
            self.active = self.cursor;
        }
    }

    /// Move the cursor right (wrapping) and activate it.
    pub fn next(&mut self) {
        if self.tabs.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.tabs.len();
        self.active = self.cursor;
    }

    /// Move the cursor left (wrapping) and activate it.
    pub fn prev(&mut self) {
        if self.tabs.is_empty() {
            return;
        }
        self.cursor = if self.cursor == 0 {
            self.tabs.len() - 1
        } else {
            self.cursor - 1
        };
        self.active = self.cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(id: &str) -> Tab {
        Tab {
            id: id.to_string(),
            title: id.to_uppercase(),
            body: format!("body of {}", id),
        }
    }

    fn tabs() -> TabbedInterface {
        TabbedInterface::new(vec![tab("t1"), tab("t2"), tab("t3")], Some(0))
    }

    #[test]
    fn exactly_one_active_after_each_switch() {
        let mut t = tabs();
        t.switch_tab("t2");
        assert_eq!(t.active_index(), 1);
        t.switch_tab("t3");
        assert_eq!(t.active_index(), 2);
        assert_eq!(t.active_tab().unwrap().id, "t3");
    }

    #[test]
    fn unknown_id_is_a_silent_noop() {
        let mut t = tabs();
        t.switch_tab("t2");
        t.switch_tab("nope");
        assert_eq!(t.active_index(), 1);
        assert_eq!(t.cursor, 1);
    }

    #[test]
    fn arrow_navigation_wraps_and_activates() {
        let mut t = tabs();
        // ArrowLeft from the first tab wraps to the last and activates it.
        t.prev();
        assert_eq!(t.cursor, 2);
        assert_eq!(t.active_index(), 2);
        t.next();
        assert_eq!(t.active_index(), 0);
    }

    #[test]
    fn initial_marker_selects_start_tab() {
        let t = TabbedInterface::new(vec![tab("a"), tab("b")], Some(1));
        assert_eq!(t.active_index(), 1);
        let t = TabbedInterface::new(vec![tab("a"), tab("b")], None);
        assert_eq!(t.active_index(), 0);
    }

    #[test]
    fn empty_tab_set_does_not_panic() {
        let mut t = TabbedInterface::new(Vec::new(), None);
        t.next();
        t.prev();
        t.switch_tab("t1");
        assert!(t.active_tab().is_none());
    }
}
