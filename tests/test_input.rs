use std::sync::mpsc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use space_garbage::entities::Controls;
use space_garbage::input::{poll_input, InputPoll};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn poll(events: Vec<Event>) -> InputPoll {
    let (tx, rx) = mpsc::channel();
    for event in events {
        tx.send(event).unwrap();
    }
    poll_input(&rx)
}

#[test]
fn nothing_pending_means_no_input() {
    assert_eq!(poll(Vec::new()), InputPoll::default());
}

#[test]
fn arrows_and_space() {
    let p = poll(vec![press(KeyCode::Up), press(KeyCode::Left), press(KeyCode::Char(' '))]);
    assert_eq!(
        p.controls,
        Controls { rows_direction: -1, columns_direction: -1, fire: true }
    );
    assert!(!p.quit);
}

#[test]
fn last_event_wins_per_axis() {
    let p = poll(vec![press(KeyCode::Up), press(KeyCode::Right), press(KeyCode::Down)]);
    assert_eq!(p.controls.rows_direction, 1);
    assert_eq!(p.controls.columns_direction, 1);
}

#[test]
fn wasd_steers_too() {
    let p = poll(vec![press(KeyCode::Char('s')), press(KeyCode::Char('a'))]);
    assert_eq!(p.controls.rows_direction, 1);
    assert_eq!(p.controls.columns_direction, -1);
}

#[test]
fn release_events_are_ignored() {
    let mut release = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    let p = poll(vec![Event::Key(release)]);
    assert_eq!(p.controls, Controls::default());
}

#[test]
fn quit_keys() {
    assert!(poll(vec![press(KeyCode::Char('q'))]).quit);
    assert!(poll(vec![press(KeyCode::Esc)]).quit);
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(poll(vec![ctrl_c]).quit);
    assert!(!poll(vec![press(KeyCode::Char('c'))]).quit);
}

#[test]
fn queue_is_drained() {
    let (tx, rx) = mpsc::channel();
    tx.send(press(KeyCode::Up)).unwrap();
    assert_eq!(poll_input(&rx).controls.rows_direction, -1);
    assert_eq!(poll_input(&rx), InputPoll::default());
}
