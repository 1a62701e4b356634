//! Session tests - lock, line clear, game over, progression and scoring

use termtris::core::tuning::bag_with_copies;
use termtris::core::{
    DirtySet, GameSession, LevelTuning, Region, Rejection, ResetReason, SessionEvent, StepOutcome, Tetromino,
    Tuning,
};
use termtris::types::PieceKind;

/// Single-kind tuning with one level per threshold.
fn tuning(kind: PieceKind, fuse: u32, thresholds: &[u32]) -> Tuning {
    let levels = thresholds
        .iter()
        .map(|&threshold| LevelTuning {
            palette: [1, 2, 3, 4, 5, 6, 7],
            fall_speed: 1,
            fuse,
            threshold,
            bag: vec![kind],
        })
        .collect();
    Tuning::new(levels).unwrap()
}

fn bar_session(rows: usize, thresholds: &[u32]) -> GameSession {
    let mut session = GameSession::with_tuning(rows, tuning(PieceKind::I, 1, thresholds), 1);
    session.take_events();
    *session.dirty_mut() = DirtySet::new();
    session
}

#[test]
fn test_lock_scenario_vertical_bar() {
    let mut session = bar_session(4, &[0]);
    assert_eq!(session.position(), (7, -4));

    for _ in 0..4 {
        assert_eq!(session.gravity_step(), StepOutcome::Fell);
    }
    assert_eq!(session.position(), (7, 0));
    assert_eq!(session.gravity_step(), StepOutcome::Resting { fuse: 1 });
    assert_eq!(
        session.gravity_step(),
        StepOutcome::Locked {
            kind: PieceKind::I,
            cleared: 0
        }
    );

    // Four rows of gravity plus four locked cells at level 0.
    assert_eq!(session.score(), 4 + 4 * 10);
    assert_eq!(session.grid().dump(), "-------6--------\n".repeat(4));
    assert!(session.hold_available());
    assert_eq!(
        session.take_events(),
        vec![SessionEvent::Locked {
            kind: PieceKind::I,
            x: 7,
            y: 0
        }]
    );

    // The next bar is already waiting at the spawn point.
    assert_eq!(session.position(), (7, -4));
    assert_eq!(session.fuse(), None);
}

#[test]
fn test_game_over_resets_session() {
    let mut session = bar_session(4, &[0]);
    while !session.gravity_step().ended_piece() {}
    session.take_events();

    // The second bar cannot enter the field.
    assert_eq!(session.gravity_step(), StepOutcome::Resting { fuse: 1 });
    assert_eq!(session.gravity_step(), StepOutcome::GameOver);

    assert_eq!(session.score(), 0);
    assert_eq!(session.lines(), 0);
    assert_eq!(session.level(), 0);
    assert!(session.grid().is_empty());
    assert_eq!(session.game_id(), 1);
    assert!(session.dirty().is_dirty(Region::Chrome));
    assert_eq!(
        session.take_events(),
        vec![
            SessionEvent::GameOver {
                score: 44,
                lines: 0,
                level: 0
            },
            SessionEvent::Reset {
                reason: ResetReason::GameOver,
                rows: 4
            },
        ]
    );
}

#[test]
fn test_line_clear_scenario() {
    let mut session = bar_session(4, &[0, 1]);
    for col in (0..16).filter(|&c| c != 7) {
        session.grid_mut().set_cell(3, col, Some(PieceKind::O));
    }
    *session.dirty_mut() = DirtySet::new();

    let outcome = loop {
        let outcome = session.gravity_step();
        if outcome.ended_piece() {
            break outcome;
        }
    };
    assert_eq!(
        outcome,
        StepOutcome::Locked {
            kind: PieceKind::I,
            cleared: 1
        }
    );

    // Reward is computed at the level in force before promotion.
    assert_eq!(session.score(), 4 + 40 + 1000);
    assert_eq!(session.lines(), 1);
    assert_eq!(session.level(), 1);
    assert_eq!(
        session.grid().dump(),
        "----------------\n-------6--------\n-------6--------\n-------6--------\n"
    );

    for region in [Region::Board, Region::Score, Region::Lines, Region::Level, Region::Next] {
        assert!(session.dirty().is_dirty(region), "{:?}", region);
    }

    let events = session.take_events();
    assert!(events.contains(&SessionEvent::LinesCleared {
        count: 1,
        lines: 1,
        score: 1044
    }));
    assert!(events.contains(&SessionEvent::LevelChanged { from: 0, to: 1 }));
}

#[test]
fn test_hard_drop_scores_every_row_triple() {
    let mut session = bar_session(4, &[0]);
    let outcome = session.hard_drop();
    assert!(matches!(outcome, StepOutcome::Locked { .. }));
    assert_eq!(session.score(), 4 * 3 + 40);

    // The boost ends with the lock.
    assert_eq!(session.gravity_step(), StepOutcome::Resting { fuse: 1 });
    assert_eq!(session.score(), 52);
}

#[test]
fn test_level_promotion_is_deterministic() {
    let tuning = tuning(PieceKind::I, 1, &[0, 5, 10]);
    assert_eq!(tuning.level_for_lines(7), 1);
    assert_eq!(tuning.level_for_lines(7), tuning.level_for_lines(7));
    assert_eq!(Tuning::standard().level_for_lines(64), 7);
    assert_eq!(Tuning::standard().level_for_lines(65), 8);
}

#[test]
fn test_score_never_decreases_between_games() {
    let mut session = GameSession::new(20, 7);
    let mut prev = session.score();

    for i in 0..2000 {
        match i % 7 {
            0 => {
                session.move_left();
            }
            1 => {
                session.rotate_cw();
            }
            2 => {
                session.move_right();
            }
            3 => session.soft_drop(),
            4 => {
                session.rotate_ccw();
            }
            5 if i % 3 == 0 => {
                session.hard_drop();
            }
            _ => {
                session.advance();
            }
        }

        let game_over = session
            .take_events()
            .iter()
            .any(|e| matches!(e, SessionEvent::GameOver { .. }));
        if game_over {
            prev = session.score();
            continue;
        }
        assert!(session.score() >= prev, "score dropped at step {}", i);
        prev = session.score();
    }
}

#[test]
fn test_first_pieces_are_one_full_bag() {
    let mut session = GameSession::new(200, 99);
    let mut kinds = Vec::new();
    for _ in 0..14 {
        kinds.push(session.falling().kind());
        session.hard_drop();
    }
    kinds.sort();

    let mut expected = bag_with_copies(2);
    expected.sort();
    assert_eq!(kinds, expected);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameSession::new(20, 4242);
    let mut b = GameSession::new(20, 4242);
    for _ in 0..30 {
        assert_eq!(a.falling(), b.falling());
        assert_eq!(a.next(), b.next());
        a.hard_drop();
        b.hard_drop();
    }
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.score(), b.score());
}

#[test]
fn test_lateral_moves_are_reversible() {
    let mut session = GameSession::new(20, 1);
    session.place_falling(Tetromino::new(PieceKind::T), 5, 5);

    assert!(session.move_right().success);
    assert_eq!(session.position(), (6, 5));
    assert!(session.move_left().success);
    assert_eq!(session.position(), (5, 5));
}

#[test]
fn test_walls_reject_moves() {
    let mut session = GameSession::new(20, 1);
    session.place_falling(Tetromino::new(PieceKind::I), 0, 5);

    let outcome = session.move_left();
    assert!(!outcome.success);
    assert_eq!(outcome.reason, Some(Rejection::Collision));
    assert_eq!(session.position(), (0, 5));

    session.place_falling(Tetromino::new(PieceKind::O), 14, 5);
    assert!(!session.move_right().success);
}

#[test]
fn test_rotation_nudges_off_right_wall() {
    let mut session = GameSession::new(20, 1);
    session.place_falling(Tetromino::new(PieceKind::I), 15, 5);

    assert!(session.rotate_cw().success);
    assert_eq!(session.falling().width(), 4);
    assert_eq!(session.position(), (12, 5));
}

#[test]
fn test_rotation_blocked_by_stack() {
    let mut session = GameSession::new(8, 1);
    for col in 0..16 {
        if col != 7 {
            session.grid_mut().set_cell(3, col, Some(PieceKind::S));
        }
    }
    // Vertical bar through the gap; lying it down would cut through row 3.
    session.place_falling(Tetromino::new(PieceKind::I), 7, 3);
    let before = *session.falling();

    let outcome = session.rotate_ccw();
    assert_eq!(outcome.reason, Some(Rejection::Collision));
    assert_eq!(session.falling(), &before);
}

#[test]
fn test_fuse_extension_only_while_resting() {
    let mut session = GameSession::new(10, 1);
    session.place_falling(Tetromino::new(PieceKind::O), 4, 8);
    assert!(!session.extend_fuse(1));

    let fuse = session.tuning().level(0).fuse;
    assert_eq!(session.gravity_step(), StepOutcome::Resting { fuse });
    assert!(session.extend_fuse(2));
    assert_eq!(session.fuse(), Some(fuse + 2));
}

#[test]
fn test_level_change_marks_level_dependent_regions() {
    let mut session = GameSession::new(20, 1);
    *session.dirty_mut() = DirtySet::new();

    assert!(session.level_up());
    for region in Region::LEVEL_DEPENDENT {
        assert!(session.dirty().is_dirty(region), "{:?}", region);
    }
    assert!(!session.dirty().is_dirty(Region::Score));
    assert_eq!(session.palette(), &session.tuning().level(1).palette);
}

#[test]
fn test_resize_resets_but_keeps_toggles() {
    let mut session = GameSession::new(20, 1);
    session.hard_drop();
    session.toggle_pause();
    session.toggle_guides();
    session.take_events();

    session.resize(30);

    assert_eq!(session.grid().height(), 30);
    assert_eq!(session.score(), 0);
    assert!(session.paused());
    assert!(session.guides());
    assert_eq!(
        session.take_events(),
        vec![SessionEvent::Reset {
            reason: ResetReason::Resize,
            rows: 30
        }]
    );
}
