use crate::canvas::{draw_frame, frame_size};
use crate::error::TaskError;
use crate::scheduler::{Spawner, Step, Task};
use crate::world::World;

/// Plays the explosion frames once around a centre point, one per tick.
pub struct Explosion {
    center_row: f64,
    center_column: f64,
    next_frame: usize,
    drawn: Option<(f64, f64, usize)>,
}

impl Explosion {
    pub fn new(center_row: f64, center_column: f64) -> Self {
        Self {
            center_row,
            center_column,
            next_frame: 0,
            drawn: None,
        }
    }
}

impl Task<World> for Explosion {
    fn name(&self) -> &'static str {
        "explosion"
    }

    fn resume(&mut self, world: &mut World, _spawner: &mut Spawner<World>) -> Result<Step, TaskError> {
        if let Some((row, column, idx)) = self.drawn.take() {
            draw_frame(&mut world.screen, row, column, &world.frames.explosion[idx], true);
        }

        let Some(frame) = world.frames.explosion.get(self.next_frame) else {
            return Ok(Step::Completed);
        };
        let (rows, columns) = frame_size(frame);
        let row = self.center_row - rows as f64 / 2.0;
        let column = self.center_column - columns as f64 / 2.0;
        draw_frame(&mut world.screen, row, column, frame, false);

        self.drawn = Some((row, column, self.next_frame));
        self.next_frame += 1;
        Ok(Step::Suspended)
    }
}
