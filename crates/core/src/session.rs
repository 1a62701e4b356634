//! Session module - the complete game state
//!
//! Ties together grid, pieces, bag, physics and scoring. The session owns the
//! dirty-region set: every mutation marks the regions it affects, and the
//! renderer clears them as it redraws.
//!
//! Lifecycle: a session is reset at creation, on terminal resize and on game
//! over. A reset clears the grid and progression and forces a full redraw.

use crate::bag::Bag;
use crate::dirty::{DirtySet, Region};
use crate::grid::Grid;
use crate::physics::{has_collision, Fuse, MoveOutcome, Rejection, StepOutcome};
use crate::scoring::{drop_score, line_clear_score, lock_cell_score};
use crate::tetromino::{nudge_into_bounds, Tetromino};
use crate::tuning::Tuning;
use crate::types::PieceKind;

/// Why the session was reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    Start,
    Resize,
    GameOver,
}

impl ResetReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResetReason::Start => "start",
            ResetReason::Resize => "resize",
            ResetReason::GameOver => "game_over",
        }
    }
}

/// Noteworthy state changes, drained by the controller for the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Reset { reason: ResetReason, rows: usize },
    Locked { kind: PieceKind, x: i32, y: i32 },
    LinesCleared { count: u32, lines: u32, score: u64 },
    LevelChanged { from: usize, to: usize },
    GameOver { score: u64, lines: u32, level: usize },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    tuning: Tuning,
    grid: Grid,
    bag: Bag,
    falling: Tetromino,
    x: i32,
    y: i32,
    next: Tetromino,
    held: Option<Tetromino>,
    hold_available: bool,
    fall_countdown: u32,
    fuse: Fuse,
    level: usize,
    lines: u32,
    score: u64,
    /// Hard drop in progress: every row scores at the drop multiplier
    dropping: bool,
    /// Soft drop requested: the next row scores at the drop multiplier
    soft_drop: bool,
    paused: bool,
    guides: bool,
    /// Number of resets so far (0 for the first game)
    game_id: u32,
    dirty: DirtySet,
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// New session with the standard tuning
    pub fn new(rows: usize, seed: u64) -> Self {
        Self::with_tuning(rows, Tuning::standard(), seed)
    }

    /// New session with custom tuning tables
    pub fn with_tuning(rows: usize, tuning: Tuning, seed: u64) -> Self {
        let bag = Bag::new(seed, &tuning.level(0).bag);
        let placeholder = Tetromino::new(PieceKind::T);
        let mut session = Self {
            tuning,
            grid: Grid::new(rows),
            bag,
            falling: placeholder,
            x: 0,
            y: 0,
            next: placeholder,
            held: None,
            hold_available: true,
            fall_countdown: 0,
            fuse: Fuse::default(),
            level: 0,
            lines: 0,
            score: 0,
            dropping: false,
            soft_drop: false,
            paused: false,
            guides: false,
            game_id: 0,
            dirty: DirtySet::new(),
            events: Vec::new(),
        };
        session.reset(ResetReason::Start);
        session.game_id = 0;
        session
    }

    /// Start over: empty grid, level 0, score 0, fresh bag and pieces.
    ///
    /// Pause and guide toggles survive a reset.
    pub fn reset(&mut self, reason: ResetReason) {
        let rows = self.grid.height();
        self.grid = Grid::new(rows);
        self.level = 0;
        self.lines = 0;
        self.score = 0;
        self.fall_countdown = 0;
        self.fuse.clear();
        self.dropping = false;
        self.soft_drop = false;
        self.held = None;
        self.hold_available = true;
        self.bag.restart(&self.tuning.level(0).bag);
        self.next = Tetromino::new(self.bag.next(&self.tuning.level(0).bag));
        self.promote_next();
        self.game_id = self.game_id.wrapping_add(1);
        self.dirty.mark_all();
        self.events.push(SessionEvent::Reset { reason, rows });
    }

    /// Terminal height changed: rebuild the grid at the new height.
    pub fn resize(&mut self, rows: usize) {
        self.grid = Grid::new(rows);
        self.reset(ResetReason::Resize);
    }

    // ---- accessors ----

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for tests and tools.
    pub fn grid_mut(&mut self) -> &mut Grid {
        self.dirty.mark(Region::Board);
        &mut self.grid
    }

    pub fn falling(&self) -> &Tetromino {
        &self.falling
    }

    /// Top-left (x, y) of the falling piece
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn next(&self) -> &Tetromino {
        &self.next
    }

    pub fn held(&self) -> Option<&Tetromino> {
        self.held.as_ref()
    }

    pub fn hold_available(&self) -> bool {
        self.hold_available
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn guides(&self) -> bool {
        self.guides
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    /// Remaining lock-fuse steps, `None` while not resting
    pub fn fuse(&self) -> Option<u32> {
        self.fuse.remaining()
    }

    pub fn fall_countdown(&self) -> u32 {
        self.fall_countdown
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Block colors for the current level
    pub fn palette(&self) -> &[u8; 7] {
        &self.tuning.level(self.level).palette
    }

    pub fn dirty(&self) -> &DirtySet {
        &self.dirty
    }

    pub fn dirty_mut(&mut self) -> &mut DirtySet {
        &mut self.dirty
    }

    /// Take the events recorded since the last call
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Replace the falling piece and its position (tests and tools).
    pub fn place_falling(&mut self, piece: Tetromino, x: i32, y: i32) {
        self.falling = piece;
        self.x = x;
        self.y = y;
        self.fuse.clear();
        self.dirty.mark(Region::Falling);
    }

    // ---- piece flow ----

    /// Next becomes falling at its spawn point; a new next is drawn.
    fn promote_next(&mut self) {
        self.falling = self.next;
        self.x = self.falling.spawn_x();
        self.y = self.falling.spawn_y();
        self.fuse.clear();
        let kind = self.bag.next(&self.tuning.level(self.level).bag);
        self.next = Tetromino::new(kind);
        self.dirty.mark_many(&[Region::Falling, Region::Next]);
    }

    // ---- movement ----

    pub fn move_left(&mut self) -> MoveOutcome {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> MoveOutcome {
        self.shift(1)
    }

    fn shift(&mut self, dx: i32) -> MoveOutcome {
        let x = self.x + dx;
        if has_collision(&self.grid, &self.falling, x, self.y) {
            return MoveOutcome::rejected(Rejection::Collision);
        }
        self.x = x;
        self.dirty.mark(Region::Falling);
        MoveOutcome::moved()
    }

    pub fn rotate_cw(&mut self) -> MoveOutcome {
        self.rotate(self.falling.rotated_cw())
    }

    pub fn rotate_ccw(&mut self) -> MoveOutcome {
        self.rotate(self.falling.rotated_ccw())
    }

    fn rotate(&mut self, rotated: Tetromino) -> MoveOutcome {
        let (x, y) = nudge_into_bounds(&rotated, self.x, self.y, self.grid.height());
        if has_collision(&self.grid, &rotated, x, y) {
            return MoveOutcome::rejected(Rejection::Collision);
        }
        self.falling = rotated;
        self.x = x;
        self.y = y;
        self.dirty.mark(Region::Falling);
        MoveOutcome::moved()
    }

    /// Stash the falling piece, or swap it with the held one.
    ///
    /// Only once per lock cycle. A swapped-in piece restarts at its spawn point.
    pub fn hold(&mut self) -> MoveOutcome {
        if !self.hold_available {
            return MoveOutcome::rejected(Rejection::HoldUnavailable);
        }
        self.hold_available = false;

        match self.held.replace(self.falling) {
            None => self.promote_next(),
            Some(held) => {
                self.falling = held;
                self.x = held.spawn_x();
                self.y = held.spawn_y();
                self.fuse.clear();
            }
        }

        self.dirty.mark_many(&[Region::Held, Region::Falling]);
        MoveOutcome::moved()
    }

    /// Add `ticks` to a running fuse (lock-delay reset after a maneuver).
    pub fn extend_fuse(&mut self, ticks: u32) -> bool {
        self.fuse.extend(ticks)
    }

    // ---- gravity ----

    /// Count down to the next gravity step; run it when the countdown expires.
    ///
    /// Returns `None` while paused or while the countdown is still running.
    pub fn advance(&mut self) -> Option<StepOutcome> {
        if self.paused {
            return None;
        }
        self.fall_countdown = self.fall_countdown.saturating_sub(1);
        if self.fall_countdown > 0 {
            return None;
        }
        self.fall_countdown = self.tuning.level(self.level).fall_speed;
        Some(self.gravity_step())
    }

    /// One physics tick: fall a row, or burn the fuse and maybe lock.
    pub fn gravity_step(&mut self) -> StepOutcome {
        self.dirty.mark(Region::Falling);

        if !has_collision(&self.grid, &self.falling, self.x, self.y + 1) {
            let boosted = self.dropping || std::mem::take(&mut self.soft_drop);
            self.fuse.clear();
            self.score += drop_score(self.level, boosted);
            self.y += 1;
            self.dirty.mark(Region::Score);
            return StepOutcome::Fell;
        }

        let length = self.tuning.level(self.level).fuse;
        if !self.fuse.burn(length) {
            return StepOutcome::Resting {
                fuse: self.fuse.remaining().unwrap_or(length),
            };
        }

        self.lock()
    }

    /// Fall and lock right away, scoring every row at the drop multiplier.
    ///
    /// Bounded by the grid height plus the fuse length.
    pub fn hard_drop(&mut self) -> StepOutcome {
        self.dropping = true;
        loop {
            let outcome = self.gravity_step();
            if outcome.ended_piece() {
                return outcome;
            }
        }
    }

    /// Make the next loop iteration run a gravity step that locks if resting.
    pub fn soft_drop(&mut self) {
        self.fuse.expire();
        self.fall_countdown = 0;
        self.soft_drop = true;
    }

    /// Merge the falling piece into the grid, clear lines, bring in the next.
    fn lock(&mut self) -> StepOutcome {
        self.hold_available = true;
        self.dropping = false;
        self.soft_drop = false;
        self.fuse.clear();

        let kind = self.falling.kind();
        let minos = self.falling.minos();
        if minos.iter().any(|&(r, _)| self.y + (r as i32) < 0) {
            self.events.push(SessionEvent::GameOver {
                score: self.score,
                lines: self.lines,
                level: self.level,
            });
            self.reset(ResetReason::GameOver);
            return StepOutcome::GameOver;
        }

        let per_cell = lock_cell_score(self.level);
        for (r, c) in minos {
            let row = (self.y + r as i32) as usize;
            let col = (self.x + c as i32) as usize;
            self.grid.set_cell(row, col, Some(kind));
            self.score += per_cell;
        }
        // The merged cells may never have been drawn as the falling piece
        // (hard drop), so the board repaints.
        self.dirty
            .mark_many(&[Region::Board, Region::Falling, Region::Score]);
        self.events.push(SessionEvent::Locked {
            kind,
            x: self.x,
            y: self.y,
        });

        let cleared = self.check_lines();
        self.promote_next();
        StepOutcome::Locked { kind, cleared }
    }

    /// Remove full rows and apply the line reward and level promotion.
    fn check_lines(&mut self) -> u32 {
        let cleared = self.grid.clear_full_rows();
        if cleared == 0 {
            return 0;
        }

        self.lines += cleared;
        self.score += line_clear_score(self.level, cleared);
        self.events.push(SessionEvent::LinesCleared {
            count: cleared,
            lines: self.lines,
            score: self.score,
        });

        let target = self.tuning.level_for_lines(self.lines);
        if target > self.level {
            self.set_level(target);
        }

        self.dirty
            .mark_many(&[Region::Board, Region::Score, Region::Lines]);
        cleared
    }

    // ---- level and toggles ----

    fn set_level(&mut self, level: usize) {
        let from = self.level;
        self.level = level;
        self.dirty.mark_many(&Region::LEVEL_DEPENDENT);
        self.events.push(SessionEvent::LevelChanged { from, to: level });
    }

    /// Manual level increase; false at the top of the table.
    pub fn level_up(&mut self) -> bool {
        if self.level >= self.tuning.max_level() {
            return false;
        }
        self.set_level(self.level + 1);
        true
    }

    /// Manual level decrease; false at level 0.
    pub fn level_down(&mut self) -> bool {
        if self.level == 0 {
            return false;
        }
        self.set_level(self.level - 1);
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn toggle_guides(&mut self) -> bool {
        self.guides = !self.guides;
        self.dirty.mark_many(&[Region::Board, Region::Falling]);
        self.guides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::LevelTuning;

    fn only(kind: PieceKind, fuse: u32) -> Tuning {
        Tuning::new(vec![LevelTuning {
            palette: [1, 2, 3, 4, 5, 6, 7],
            fall_speed: 1,
            fuse,
            threshold: 0,
            bag: vec![kind],
        }])
        .unwrap()
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new(20, 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 0);
        assert_eq!(session.lines(), 0);
        assert!(session.held().is_none());
        assert!(session.hold_available());
        assert!(session.grid().is_empty());
        assert_eq!(session.game_id(), 0);
        assert!(session.dirty().is_dirty(Region::Chrome));

        let falling = session.falling();
        assert_eq!(
            session.position(),
            (falling.spawn_x(), falling.spawn_y())
        );
    }

    #[test]
    fn test_advance_waits_for_countdown() {
        let mut session = GameSession::new(20, 1);
        // Countdown starts expired: the first iteration steps.
        assert_eq!(session.advance(), Some(StepOutcome::Fell));
        let speed = session.tuning().level(0).fall_speed;
        for _ in 0..speed - 1 {
            assert_eq!(session.advance(), None);
        }
        assert_eq!(session.advance(), Some(StepOutcome::Fell));
    }

    #[test]
    fn test_paused_session_does_not_fall() {
        let mut session = GameSession::new(20, 1);
        session.toggle_pause();
        let before = session.position();
        for _ in 0..10 {
            assert_eq!(session.advance(), None);
        }
        assert_eq!(session.position(), before);
    }

    #[test]
    fn test_soft_drop_locks_resting_piece_next_step() {
        let mut session = GameSession::with_tuning(4, only(PieceKind::O, 10), 1);
        while session.gravity_step() == StepOutcome::Fell {}
        assert_eq!(session.fuse(), Some(10));

        session.soft_drop();
        assert!(matches!(
            session.advance(),
            Some(StepOutcome::Locked { .. })
        ));
    }

    #[test]
    fn test_soft_drop_scores_one_boosted_row() {
        let mut session = GameSession::with_tuning(10, only(PieceKind::O, 10), 1);
        session.soft_drop();
        assert_eq!(session.advance(), Some(StepOutcome::Fell));
        assert_eq!(session.score(), 3);
        assert_eq!(session.gravity_step(), StepOutcome::Fell);
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn test_hold_once_per_lock() {
        let mut session = GameSession::new(20, 3);
        let first = *session.falling();
        let upcoming = *session.next();

        assert!(session.hold().success);
        assert_eq!(session.held(), Some(&first));
        assert_eq!(session.falling(), &upcoming);

        let again = session.hold();
        assert_eq!(again.reason, Some(Rejection::HoldUnavailable));

        session.hard_drop();
        assert!(session.hold_available());
    }

    #[test]
    fn test_hold_swap_restarts_at_spawn() {
        let mut session = GameSession::new(20, 5);
        assert!(session.hold().success);
        let stashed = *session.held().unwrap();
        session.hard_drop();

        session.gravity_step();
        session.gravity_step();
        let current = *session.falling();
        assert!(session.hold().success);

        assert_eq!(session.falling(), &stashed);
        assert_eq!(session.held(), Some(&current));
        assert_eq!(
            session.position(),
            (stashed.spawn_x(), stashed.spawn_y())
        );
    }

    #[test]
    fn test_manual_level_bounds() {
        let mut session = GameSession::new(20, 1);
        assert!(!session.level_down());
        for _ in 0..9 {
            assert!(session.level_up());
        }
        assert_eq!(session.level(), 9);
        assert!(!session.level_up());
        assert_eq!(session.palette(), &session.tuning().level(9).palette);
    }

    #[test]
    fn test_events_are_drained() {
        let mut session = GameSession::new(20, 1);
        let events = session.take_events();
        assert_eq!(
            events,
            vec![SessionEvent::Reset {
                reason: ResetReason::Start,
                rows: 20
            }]
        );
        assert!(session.take_events().is_empty());
    }
}
