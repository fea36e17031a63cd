use proptest::prelude::*;

use space_garbage::config::MotionConfig;
use space_garbage::physics::next_velocity;

fn motion() -> MotionConfig {
    MotionConfig::default()
}

#[test]
fn at_rest_without_input_stays_at_rest() {
    assert_eq!(next_velocity(0.0, 0.0, 0, 0, &motion()), (0.0, 0.0));
}

#[test]
fn input_accelerates_in_its_direction() {
    let m = motion();
    let (row, column) = next_velocity(0.0, 0.0, 1, -1, &m);
    assert!(row > 0.0);
    assert!(column < 0.0);
    assert_eq!(row, -column);
}

#[test]
fn axes_are_independent() {
    let (row, column) = next_velocity(0.0, 1.5, 1, 0, &motion());
    assert!(row > 0.0);
    assert!((column - 1.5 * 0.8).abs() < 1e-12);
}

#[test]
fn friction_snaps_small_speeds_to_zero() {
    let (row, _) = next_velocity(0.1, 0.0, 0, 0, &motion());
    assert_eq!(row, 0.0);
}

#[test]
fn opposite_input_brakes_then_reverses() {
    let m = motion();
    let mut speed = 1.8;
    let mut history = Vec::new();
    for _ in 0..10 {
        speed = next_velocity(speed, 0.0, -1, 0, &m).0;
        history.push(speed);
    }
    assert!(history[0] < 1.8);
    assert!(*history.last().unwrap() < 0.0);
}

#[test]
fn table_of_single_steps() {
    let m = motion();
    // (row_speed, rows_direction) -> expected row speed
    let cases = [
        (0.0, 1, 0.6),
        (0.0, -1, -0.6),
        (1.0, 0, 0.8),
        (-1.0, 0, -0.8),
        (2.0, 1, 1.6),
    ];
    for (speed, direction, expected) in cases {
        let (row, _) = next_velocity(speed, 0.0, direction, 0, &m);
        assert!((row - expected).abs() < 1e-9, "{speed} {direction}: {row} != {expected}");
    }
}

proptest! {
    #[test]
    fn decay_is_monotonic_and_never_reverses(start in -2.0f64..2.0) {
        let m = motion();
        let mut speed = start;
        for _ in 0..50 {
            let next = next_velocity(speed, 0.0, 0, 0, &m).0;
            if speed != 0.0 {
                prop_assert!(next.abs() < speed.abs());
            } else {
                prop_assert_eq!(next, 0.0);
            }
            prop_assert!(next == 0.0 || next.signum() == speed.signum());
            speed = next;
        }
        prop_assert_eq!(speed, 0.0);
    }

    #[test]
    fn sustained_input_respects_limit(
        start in -2.0f64..2.0,
        row_dir in -1i8..=1,
        col_dir in -1i8..=1,
    ) {
        let m = motion();
        let (mut row, mut column) = (start, -start);
        for _ in 0..100 {
            (row, column) = next_velocity(row, column, row_dir, col_dir, &m);
            prop_assert!(row.abs() <= m.row_speed_limit);
            prop_assert!(column.abs() <= m.column_speed_limit);
        }
    }
}
