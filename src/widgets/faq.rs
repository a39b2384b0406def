//! FAQ accordion.
//!
//! Question/answer pairs with accordion semantics: expanding one pair
//! collapses whichever other pair is open, and activating the open pair
//! collapses it, so at most one answer is ever visible. Activation is
//! delegated: the panel has a single handler that routes to an item by
//! index, whether the index came from the key cursor or a mouse row.

#[derive(Debug, Clone)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
    /// Exposed expanded/collapsed flag, kept in sync at every transition.
    pub expanded: bool,
}

impl FaqItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            expanded: false,
        }
    }

    /// Indicator glyph next to the question.
    pub fn indicator(&self) -> &'static str {
        if self.expanded {
            "▾"
        } else {
            "▸"
        }
    }
}

pub struct FaqAccordion {
    items: Vec<FaqItem>,
    /// Which question the key cursor is on.
    pub cursor: usize,
}

impl FaqAccordion {
    pub fn new(items: Vec<FaqItem>) -> Self {
        Self { items, cursor: 0 }
    }

    pub fn items(&self) -> &[FaqItem] {
        &self.items
    }

    pub fn expanded_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.expanded)
    }

    /// Toggle the item at `index`, collapsing any other open item first.
    /// Out-of-range indices are ignored.
    pub fn activate(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        let was_expanded = self.items[index].expanded;
        for item in &mut self.items {
            item.expanded = false;
        }
        self.items[index].expanded = !was_expanded;
    }

    pub fn activate_cursor(&mut self) {
        self.activate(self.cursor);
    }

    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accordion() -> FaqAccordion {
        FaqAccordion::new(vec![
            FaqItem::new("q1", "a1"),
            FaqItem::new("q2", "a2"),
            FaqItem::new("q3", "a3"),
        ])
    }

    #[test]
    fn at_most_one_expanded() {
        let mut faq = accordion();
        faq.activate(0);
        faq.activate(2);
        faq.activate(1);
        let expanded: Vec<_> = faq.items().iter().filter(|i| i.expanded).collect();
        assert_eq!(expanded.len(), 1);
        assert_eq!(faq.expanded_index(), Some(1));
    }

    #[test]
    fn activating_open_item_collapses_it() {
        let mut faq = accordion();
        faq.activate(1);
        assert_eq!(faq.expanded_index(), Some(1));
        faq.activate(1);
        assert_eq!(faq.expanded_index(), None);
    }

    #[test]
    fn switching_collapses_the_other() {
        let mut faq = accordion();
        faq.activate(0);
        faq.activate(1);
        assert!(!faq.items()[0].expanded);
        assert!(faq.items()[1].expanded);
        faq.activate(1);
        assert_eq!(faq.expanded_index(), None);
    }

    #[test]
    fn indicator_tracks_state() {
        let mut faq = accordion();
        assert_eq!(faq.items()[0].indicator(), "▸");
        faq.activate(0);
        assert_eq!(faq.items()[0].indicator(), "▾");
    }

    #[test]
    fn out_of_range_activation_is_ignored() {
        let mut faq = accordion();
        faq.activate(0);
        faq.activate(99);
        assert_eq!(faq.expanded_index(), Some(0));
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut faq = accordion();
        faq.cursor_up();
        assert_eq!(faq.cursor, 0);
        for _ in 0..10 {
            faq.cursor_down();
        }
        assert_eq!(faq.cursor, 2);
    }
}
