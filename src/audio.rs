/// Fire-and-forget sound cues.
///
/// Tasks queue cues on the world; the game loop drains them into an
/// [`AudioSink`] once per tick.

use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Fire,
}

pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Discards every cue.
#[derive(Debug, Default)]
pub struct Muted;

impl AudioSink for Muted {
    fn play(&mut self, _cue: Cue) {}
}

/// Rings the terminal bell.  Write errors are ignored.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        match cue {
            Cue::Fire => {
                let _ = self.out.write_all(b"\x07");
                let _ = self.out.flush();
            }
        }
    }
}
