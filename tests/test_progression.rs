use proptest::prelude::*;

use space_garbage::config::ProgressionConfig;
use space_garbage::progression::{current_phrase, spawn_interval, weapon_unlocked, Progression};

fn config() -> ProgressionConfig {
    ProgressionConfig::default()
}

// ── spawn_interval ────────────────────────────────────────────────────────────

#[test]
fn no_spawning_before_first_threshold() {
    let c = config();
    assert_eq!(spawn_interval(&c, 0.0), None);
    assert_eq!(spawn_interval(&c, 1957.0), None);
    assert_eq!(spawn_interval(&c, 1960.9), None);
}

#[test]
fn spawn_interval_steps_at_thresholds() {
    let c = config();
    assert_eq!(spawn_interval(&c, 1961.0), Some(20));
    assert_eq!(spawn_interval(&c, 1968.9), Some(20));
    assert_eq!(spawn_interval(&c, 1969.0), Some(14));
    assert_eq!(spawn_interval(&c, 1981.0), Some(10));
    assert_eq!(spawn_interval(&c, 1995.0), Some(8));
    assert_eq!(spawn_interval(&c, 2010.0), Some(6));
    assert_eq!(spawn_interval(&c, 2020.0), Some(2));
    assert_eq!(spawn_interval(&c, 3000.0), Some(2));
}

proptest! {
    #[test]
    fn spawn_interval_never_increases(a in 1900.0f64..2100.0, b in 1900.0f64..2100.0) {
        let c = config();
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        match (spawn_interval(&c, early), spawn_interval(&c, late)) {
            (Some(e), Some(l)) => prop_assert!(l <= e),
            (Some(_), None) => prop_assert!(false, "spawning stopped at {late}"),
            _ => {}
        }
    }

    #[test]
    fn spawn_interval_has_lower_bound(t in -1.0e6f64..1.0e6) {
        if let Some(interval) = spawn_interval(&config(), t) {
            prop_assert!(interval >= 1);
        }
    }
}

// ── weapon_unlocked ───────────────────────────────────────────────────────────

#[test]
fn weapon_threshold_is_inclusive() {
    let c = config();
    assert!(!weapon_unlocked(&c, 2019.999));
    assert!(weapon_unlocked(&c, 2020.0));
    assert!(weapon_unlocked(&c, 2020.1));
}

proptest! {
    #[test]
    fn weapon_locked_below_threshold(t in 0.0f64..2020.0) {
        prop_assert!(!weapon_unlocked(&config(), t));
    }

    #[test]
    fn weapon_unlocked_from_threshold(t in 2020.0f64..5000.0) {
        prop_assert!(weapon_unlocked(&config(), t));
    }
}

// ── current_phrase ────────────────────────────────────────────────────────────

#[test]
fn phrase_matches_exact_year() {
    let c = config();
    assert_eq!(current_phrase(&c, 1961.0), Some("Gagarin flew!"));
    assert_eq!(current_phrase(&c, 1969.4), Some("Armstrong got on the moon!"));
}

#[test]
fn phrase_sticks_between_entries() {
    let c = config();
    assert_eq!(current_phrase(&c, 1965.0), Some("Gagarin flew!"));
    assert_eq!(current_phrase(&c, 1997.9), Some("Flight of the Shuttle Columbia"));
    assert_eq!(current_phrase(&c, 2500.0), Some("Take the plasma gun! Shoot the garbage!"));
}

#[test]
fn no_phrase_before_first_entry() {
    assert_eq!(current_phrase(&config(), 1900.0), None);
}

proptest! {
    #[test]
    fn phrase_is_latest_entry_not_after_query(t in 1957.0f64..2100.0) {
        let c = config();
        let text = current_phrase(&c, t).unwrap();
        let entry = c.phrases.iter().find(|p| p.text == text).unwrap();
        prop_assert!(entry.year as f64 <= t.floor());
        prop_assert!(c.phrases.iter().all(|p| p.year <= entry.year || p.year as f64 > t.floor()));
    }
}

// ── Progression clock ─────────────────────────────────────────────────────────

#[test]
fn clock_starts_at_configured_year() {
    let p = Progression::new(config());
    assert_eq!(p.year(), 1957.0);
    assert_eq!(p.ticks(), 0);
    assert_eq!(p.phrase(), Some("First Sputnik"));
    assert_eq!(p.spawn_interval(), None);
    assert!(!p.weapon_unlocked());
}

#[test]
fn clock_advances_by_fixed_step() {
    let mut p = Progression::new(config());
    for _ in 0..40 {
        p.advance_tick();
    }
    assert_eq!(p.ticks(), 40);
    assert!((p.year() - 1961.0).abs() < 1e-9);
    assert_eq!(p.spawn_interval(), Some(20));
}

#[test]
fn clock_is_monotonic() {
    let mut p = Progression::starting_at(config(), 2019.5);
    let mut previous = p.year();
    for _ in 0..20 {
        p.advance_tick();
        assert!(p.year() > previous);
        previous = p.year();
    }
    assert!(p.weapon_unlocked());
}
