//! The game loop body.
//!
//! One [`Controller::iterate`] call is one loop iteration:
//!
//! 1. count down to the next terminal size poll; reset the session on change
//! 2. dispatch at most one action
//! 3. advance the fall countdown (gravity, fuse, lock)
//! 4. render dirty regions and flush
//!
//! The controller does no I/O of its own. The caller supplies the action, a
//! size probe and the output sink, so tests can drive it headless.

use anyhow::Result;

use crate::core::GameSession;
use crate::event_log::{EventLog, LogRecord};
use crate::term::{GameView, RegionSink};
use crate::types::tuning::{FUSE_BONUS_ROTATE, FUSE_BONUS_SHIFT, SIZE_POLL_FIRST, SIZE_POLL_INTERVAL};
use crate::types::GameAction;

/// What the caller should do after an iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    /// Stop; the screen has been cleared
    Quit,
    /// Stop, restore the terminal, then print this grid dump
    DebugDump(String),
}

pub struct Controller {
    session: GameSession,
    view: GameView,
    log: EventLog,
    size: (u16, u16),
    /// Iterations left until the next size poll
    size_poll: u32,
    poll_interval: u32,
    quitting: bool,
}

impl Controller {
    /// New game for a terminal of `cols` x `rows`; the grid is `rows` tall.
    pub fn new(cols: u16, rows: u16, seed: u64, log: EventLog) -> Self {
        Self::with_session(GameSession::new(rows as usize, seed), cols, rows, log)
    }

    pub fn with_session(session: GameSession, cols: u16, rows: u16, log: EventLog) -> Self {
        let mut controller = Self {
            session,
            view: GameView::new(cols, rows),
            log,
            size: (cols, rows),
            size_poll: SIZE_POLL_FIRST,
            poll_interval: SIZE_POLL_INTERVAL,
            quitting: false,
        };
        controller.drain_events();
        controller
    }

    /// Override the size poll schedule (first poll, then every `interval`).
    pub fn with_size_poll(mut self, first: u32, interval: u32) -> Self {
        self.size_poll = first.max(1);
        self.poll_interval = interval.max(1);
        self
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn view(&self) -> &GameView {
        &self.view
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    /// Run one loop iteration.
    pub fn iterate<S: RegionSink>(
        &mut self,
        action: Option<GameAction>,
        probe_size: impl FnOnce() -> Result<(u16, u16)>,
        sink: &mut S,
    ) -> Result<LoopControl> {
        self.size_poll = self.size_poll.saturating_sub(1);
        if self.size_poll == 0 {
            self.size_poll = self.poll_interval;
            let size = probe_size()?;
            if size != self.size {
                self.resize(size);
            }
        }

        if let Some(action) = action {
            if let Some(done) = self.dispatch(action) {
                self.drain_events();
                return Ok(done);
            }
        }

        self.session.advance();
        self.drain_events();

        self.view.render(&mut self.session, sink)?;

        if self.quitting {
            sink.clear_screen()?;
            sink.flush()?;
            self.log.record(&LogRecord::Quit {
                score: self.session.score(),
                lines: self.session.lines(),
                level: self.session.level(),
            });
            self.log.flush();
            return Ok(LoopControl::Quit);
        }

        sink.flush()?;
        Ok(LoopControl::Continue)
    }

    fn resize(&mut self, (cols, rows): (u16, u16)) {
        self.size = (cols, rows);
        self.log.record(&LogRecord::Resized { cols, rows });
        self.view.resize(cols, rows);
        self.session.resize(rows as usize);
    }

    /// Apply one action. Returns a loop verdict when the action ends the loop
    /// right away.
    fn dispatch(&mut self, action: GameAction) -> Option<LoopControl> {
        let session = &mut self.session;
        match action {
            GameAction::MoveLeft => {
                if session.move_left().success {
                    session.extend_fuse(FUSE_BONUS_SHIFT);
                }
            }
            GameAction::MoveRight => {
                if session.move_right().success {
                    session.extend_fuse(FUSE_BONUS_SHIFT);
                }
            }
            GameAction::RotateCw => {
                if session.rotate_cw().success {
                    session.extend_fuse(FUSE_BONUS_ROTATE);
                }
            }
            GameAction::RotateCcw => {
                if session.rotate_ccw().success {
                    session.extend_fuse(FUSE_BONUS_ROTATE);
                }
            }
            GameAction::SoftDrop => session.soft_drop(),
            GameAction::HardDrop => {
                session.hard_drop();
            }
            GameAction::Hold => {
                session.hold();
            }
            GameAction::Pause => {
                session.toggle_pause();
            }
            GameAction::ToggleGuides => {
                session.toggle_guides();
            }
            GameAction::LevelUp => {
                session.level_up();
            }
            GameAction::LevelDown => {
                session.level_down();
            }
            GameAction::DebugDump => {
                self.log.flush();
                return Some(LoopControl::DebugDump(session.grid().dump()));
            }
            GameAction::Quit => self.quitting = true,
        }
        None
    }

    fn drain_events(&mut self) {
        for event in self.session.take_events() {
            self.log.record(&LogRecord::from(event));
        }
    }
}
