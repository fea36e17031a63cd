use rand::Rng;

use crate::canvas::{draw_styled, CellStyle};
use crate::error::TaskError;
use crate::scheduler::{Spawner, Step, Task};
use crate::world::World;

const PHASES: [CellStyle; 4] = [
    CellStyle::Dim,
    CellStyle::Normal,
    CellStyle::Bold,
    CellStyle::Normal,
];

/// A background star cycling dim → normal → bold → normal forever.
pub struct Blink {
    row: usize,
    column: usize,
    symbol: String,
    phase: usize,
    /// Ticks left in the current phase; 0 means enter the next one.
    remaining: u32,
    started: bool,
}

impl Blink {
    pub fn new(row: usize, column: usize, symbol: char) -> Self {
        Self {
            row,
            column,
            symbol: symbol.to_string(),
            phase: 0,
            remaining: 0,
            started: false,
        }
    }

    pub fn style(&self) -> CellStyle {
        PHASES[self.phase]
    }
}

impl Task<World> for Blink {
    fn name(&self) -> &'static str {
        "star"
    }

    fn resume(&mut self, world: &mut World, _spawner: &mut Spawner<World>) -> Result<Step, TaskError> {
        if self.remaining == 0 {
            if self.started {
                self.phase = (self.phase + 1) % PHASES.len();
            }
            self.started = true;
            let style = self.style();
            draw_styled(&mut world.screen, self.row as f64, self.column as f64, &self.symbol, style, false);
            let cfg = &world.config.playfield;
            self.remaining = world.rng.gen_range(cfg.blink_min_ticks..=cfg.blink_max_ticks);
        }
        self.remaining = self.remaining.saturating_sub(1);
        Ok(Step::Suspended)
    }
}
