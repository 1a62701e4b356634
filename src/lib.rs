//! termtris (workspace facade crate).
//!
//! The game logic, rendering and input live in dedicated crates under
//! `crates/`; this package re-exports them as `termtris::{core,input,term,types}`
//! and adds the pieces that tie them into a program: environment
//! configuration, the event log and the loop controller.

pub mod config;
pub mod controller;
pub mod event_log;

pub use termtris_core as core;
pub use termtris_input as input;
pub use termtris_term as term;
pub use termtris_types as types;

pub use config::Config;
pub use controller::{Controller, LoopControl};
pub use event_log::{EventLog, LogRecord};
