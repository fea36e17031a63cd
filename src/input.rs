/// Keyboard input — drains pending crossterm key events into one snapshot.
///
/// Per axis the last event wins.  Nothing pending means no movement and no
/// fire.

use std::sync::mpsc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Controls;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputPoll {
    pub controls: Controls,
    pub quit: bool,
}

/// Fold one key event into the snapshot.
pub fn apply_key(poll: &mut InputPoll, key: &KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    let controls = &mut poll.controls;
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => controls.rows_direction = -1,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => controls.rows_direction = 1,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => controls.columns_direction = -1,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => controls.columns_direction = 1,
        KeyCode::Char(' ') => controls.fire = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => poll.quit = true,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => poll.quit = true,
        _ => {}
    }
}

/// Non-blocking: drain every event currently waiting on `rx`.
pub fn poll_input(rx: &mpsc::Receiver<Event>) -> InputPoll {
    let mut poll = InputPoll::default();
    while let Ok(event) = rx.try_recv() {
        if let Event::Key(key) = event {
            apply_key(&mut poll, &key);
        }
    }
    poll
}
