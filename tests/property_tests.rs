//! Property-based tests for the position tracker.
//!
//! These tests use proptest to drive trackers through random command
//! sequences and verify the rules hold in every reachable state.

use gridtrack::core::guard;
use gridtrack::{Bounds, Command, Move, PositionTracker, TrackerBuilder, TrackerState, MAX, MIN};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_move()(variant in 0..4u8) -> Move {
        match variant {
            0 => Move::Left,
            1 => Move::Right,
            2 => Move::Up,
            _ => Move::Down,
        }
    }
}

prop_compose! {
    fn arbitrary_command()(variant in 0..5u8) -> Command {
        match variant {
            0 => Command::Move(Move::Left),
            1 => Command::Move(Move::Right),
            2 => Command::Move(Move::Up),
            3 => Command::Move(Move::Down),
            _ => Command::Exit,
        }
    }
}

prop_compose! {
    fn arbitrary_state()(
        row in MIN..=MAX,
        col in MIN..=MAX,
        last in proptest::option::of(arbitrary_move()),
    ) -> TrackerState {
        TrackerState { row, col, last_move: last }
    }
}

fn drive(commands: &[Command]) -> PositionTracker {
    let mut tracker = PositionTracker::new();
    for command in commands {
        let _ = tracker.apply(*command);
    }
    tracker
}

proptest! {
    #[test]
    fn invariant_holds_in_every_reachable_state(
        commands in prop::collection::vec(arbitrary_command(), 0..200)
    ) {
        let mut tracker = PositionTracker::new();
        for command in commands {
            let _ = tracker.apply(command);
            prop_assert!(tracker.is_valid());
            prop_assert!((MIN..=MAX).contains(&tracker.row()));
            prop_assert!((MIN..=MAX).contains(&tracker.col()));
        }
    }

    #[test]
    fn rejected_command_leaves_state_unchanged(
        prefix in prop::collection::vec(arbitrary_command(), 0..50),
        command in arbitrary_command(),
    ) {
        let mut tracker = drive(&prefix);
        let before = tracker.state();
        let history_len = tracker.history().len();

        if tracker.apply(command).is_err() {
            prop_assert_eq!(tracker.state(), before);
            prop_assert_eq!(tracker.history().len(), history_len);
        }
    }

    #[test]
    fn same_direction_twice_always_fails(
        prefix in prop::collection::vec(arbitrary_command(), 0..50),
        direction in arbitrary_move(),
    ) {
        let mut tracker = drive(&prefix);
        if tracker.step(direction).is_ok() {
            prop_assert!(tracker.step(direction).is_err());
        }
    }

    #[test]
    fn successful_move_is_a_unit_step(
        prefix in prop::collection::vec(arbitrary_command(), 0..50),
        direction in arbitrary_move(),
    ) {
        let mut tracker = drive(&prefix);
        let before = tracker.state();

        if tracker.step(direction).is_ok() {
            let (dr, dc) = direction.delta();
            prop_assert_eq!(tracker.row(), before.row + dr);
            prop_assert_eq!(tracker.col(), before.col + dc);
            prop_assert_eq!(tracker.last_move(), Some(direction));
        }
    }

    #[test]
    fn right_blocked_iff_at_max_column(state in arbitrary_state()) {
        let bounds = Bounds::default();
        let fresh = TrackerState { last_move: None, ..state };
        let allowed = guard::check_move(&fresh, &bounds, Move::Right).is_success();
        prop_assert_eq!(allowed, state.col != MAX);
    }

    #[test]
    fn boundary_blocking_is_symmetric(state in arbitrary_state()) {
        let bounds = Bounds::default();
        let fresh = TrackerState { last_move: None, ..state };

        prop_assert_eq!(
            guard::check_move(&fresh, &bounds, Move::Left).is_success(),
            state.col != MIN
        );
        prop_assert_eq!(
            guard::check_move(&fresh, &bounds, Move::Down).is_success(),
            state.row != MAX
        );
        prop_assert_eq!(
            guard::check_move(&fresh, &bounds, Move::Up).is_success(),
            state.row != MIN
        );
    }

    #[test]
    fn exit_allowed_iff_at_far_corner(
        commands in prop::collection::vec(arbitrary_command(), 0..200)
    ) {
        let mut tracker = drive(&commands);
        let at_corner = (tracker.row(), tracker.col()) == (MAX, MAX);

        prop_assert_eq!(tracker.exit().is_ok(), at_corner);
        if at_corner {
            prop_assert_eq!(tracker.state(), TrackerState::initial(&Bounds::default()));
        }
    }

    #[test]
    fn can_apply_predicts_apply(
        prefix in prop::collection::vec(arbitrary_command(), 0..50),
        command in arbitrary_command(),
    ) {
        let mut tracker = drive(&prefix);
        let predicted = tracker.can_apply(command);
        prop_assert_eq!(tracker.apply(command).is_ok(), predicted);
    }

    #[test]
    fn custom_bounds_hold_invariant(
        min in -5i32..5,
        span in 0i32..6,
        commands in prop::collection::vec(arbitrary_command(), 0..100),
    ) {
        let mut tracker = TrackerBuilder::new().bounds(min, min + span).build().unwrap();
        for command in commands {
            let _ = tracker.apply(command);
            prop_assert!(tracker.is_valid());
        }
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TrackerState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}

#[test]
fn round_trip_scenario() {
    let mut tracker = PositionTracker::new();

    tracker.move_right().unwrap();
    assert_eq!((tracker.row(), tracker.col(), tracker.last_move()), (1, 2, Some(Move::Right)));

    tracker.move_down().unwrap();
    assert_eq!((tracker.row(), tracker.col(), tracker.last_move()), (2, 2, Some(Move::Down)));

    tracker.move_right().unwrap();
    assert_eq!((tracker.row(), tracker.col(), tracker.last_move()), (2, 3, Some(Move::Right)));

    assert!(tracker.move_right().is_err());

    tracker.move_down().unwrap();
    tracker.move_right().unwrap();
    assert_eq!((tracker.row(), tracker.col()), (3, 4));
}

#[test]
fn exit_fails_everywhere_but_the_corner() {
    for row in MIN..=MAX {
        for col in MIN..=MAX {
            let state = TrackerState { row, col, last_move: None };
            let allowed = guard::check_exit(&state, &Bounds::default()).is_success();
            assert_eq!(allowed, (row, col) == (MAX, MAX));
        }
    }
}

#[test]
fn rendering_scenario() {
    let mut tracker = PositionTracker::new();
    assert_eq!(tracker.to_string(), "Robot Position: (1, 1). Last Move: None");

    tracker.move_right().unwrap();
    assert_eq!(tracker.to_string(), "Robot Position: (1, 2). Last Move: RIGHT");
}
