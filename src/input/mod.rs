//! Input module - translates key events into engine actions.

pub mod map;

pub use map::{handle_key_event, should_quit};
