//! The four interactive components: theme toggle, counter game, FAQ
//! accordion, and tabbed switcher. Each owns its own state and is
//! constructed once at startup; none knows about the others.

pub mod counter;
pub mod faq;
pub mod tabs;
pub mod theme;
