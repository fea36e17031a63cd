use crate::canvas::{draw_frame, Grid};
use crate::collision;
use crate::error::TaskError;
use crate::scheduler::{Spawner, Step, Task};
use crate::world::World;

/// A plasma shot flying in a straight line until it leaves the screen or
/// hits an obstacle.
pub struct Gunfire {
    row: f64,
    column: f64,
    row_speed: f64,
    column_speed: f64,
    drawn: Option<(f64, f64)>,
}

impl Gunfire {
    pub fn new(row: f64, column: f64, row_speed: f64, column_speed: f64) -> Self {
        Self {
            row,
            column,
            row_speed,
            column_speed,
            drawn: None,
        }
    }

    fn symbol(&self) -> &'static str {
        if self.column_speed == 0.0 {
            "|"
        } else if self.row_speed == 0.0 {
            "-"
        } else {
            "*"
        }
    }

    fn in_bounds(&self, screen: &Grid) -> bool {
        self.row >= 0.0
            && self.row < screen.rows() as f64
            && self.column >= 0.0
            && self.column < screen.columns() as f64
    }
}

impl Task<World> for Gunfire {
    fn name(&self) -> &'static str {
        "gunfire"
    }

    fn resume(&mut self, world: &mut World, _spawner: &mut Spawner<World>) -> Result<Step, TaskError> {
        if let Some((row, column)) = self.drawn.take() {
            draw_frame(&mut world.screen, row, column, self.symbol(), true);
        }

        self.row += self.row_speed;
        self.column += self.column_speed;

        if !self.in_bounds(&world.screen) {
            return Ok(Step::Completed);
        }
        if let Some(id) = collision::projectile_hit(&mut world.obstacles, self.row, self.column) {
            log::debug!("gunfire hit obstacle {:?}", id);
            return Ok(Step::Completed);
        }

        draw_frame(&mut world.screen, self.row, self.column, self.symbol(), false);
        self.drawn = Some((self.row, self.column));
        Ok(Step::Suspended)
    }
}
