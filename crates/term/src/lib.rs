//! Terminal rendering for termtris.
//!
//! The render pass ([`GameView`]) writes styled text through the
//! [`RegionSink`] trait. Two sinks ship with the crate:
//!
//! - [`TerminalRenderer`]: queues crossterm commands and flushes them to the
//!   terminal once per loop iteration
//! - [`FrameBuffer`]: an in-memory screen for tests
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Only touch the screen where the game state actually changed
//! - Two terminal columns per grid cell to keep blocks roughly square

pub mod fb;
pub mod game_view;
pub mod layout;
pub mod renderer;
pub mod sink;

pub use termtris_core as core;
pub use termtris_types as types;

pub use fb::{Cell, FrameBuffer};
pub use game_view::GameView;
pub use layout::{Layout, Stat};
pub use renderer::{query_terminal_size, TerminalRenderer};
pub use sink::RegionSink;
