//! Non-blocking key reads.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Read at most one pending event without waiting.
///
/// Returns `Ok(None)` when nothing is pending or the event maps to no action.
pub fn poll_key_event() -> io::Result<Option<GameAction>> {
    if !event::poll(Duration::ZERO)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) => Ok(handle_key_event(key)),
        _ => Ok(None),
    }
}
