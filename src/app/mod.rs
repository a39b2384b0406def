//! Core application logic: state composition, event handling, and input
//! routing.

pub mod event;
pub mod handler;
pub mod input;
pub mod state;
