//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and reads
//! them without blocking. The key set is fixed.

pub mod map;
pub mod poll;

pub use termtris_types as types;

pub use map::{handle_key_event, should_quit};
pub use poll::poll_key_event;
