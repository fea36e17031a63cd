use crate::behaviors::explosion::Explosion;
use crate::canvas::{draw_frame, frame_size};
use crate::entities::{BoundingBox, CollisionMark, ObstacleId};
use crate::error::TaskError;
use crate::scheduler::{Spawner, Step, Task};
use crate::world::World;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebrisState {
    Falling,
    Destroyed,
    Escaped,
}

/// A piece of space garbage falling from the top edge.
///
/// Registers its obstacle on the first resumption, then each tick either
/// blows up (projectile mark observed), leaves the screen, or moves down by
/// `speed` rows.
pub struct DebrisFall {
    frame: String,
    row: f64,
    column: f64,
    speed: f64,
    size: (usize, usize),
    obstacle: Option<ObstacleId>,
    drawn: Option<(f64, f64)>,
    state: DebrisState,
}

impl DebrisFall {
    pub fn new(frame: String, column: f64, speed: f64) -> Self {
        Self::starting_at(frame, 0.0, column, speed)
    }

    pub fn starting_at(frame: String, row: f64, column: f64, speed: f64) -> Self {
        let size = frame_size(&frame);
        Self {
            frame,
            row,
            column,
            speed,
            size,
            obstacle: None,
            drawn: None,
            state: DebrisState::Falling,
        }
    }

    pub fn state(&self) -> DebrisState {
        self.state
    }

    fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.row, self.column, self.size.0, self.size.1)
    }

    fn finish(&mut self, world: &mut World, state: DebrisState) -> Step {
        if let Some(id) = self.obstacle.take() {
            world.obstacles.deregister(id);
        }
        self.state = state;
        log::debug!("debris at column {} {:?}", self.column, state);
        Step::Completed
    }
}

impl Task<World> for DebrisFall {
    fn name(&self) -> &'static str {
        "debris"
    }

    fn resume(&mut self, world: &mut World, spawner: &mut Spawner<World>) -> Result<Step, TaskError> {
        if self.frame.trim().is_empty() {
            return Err(TaskError::EmptyFrame("debris"));
        }

        if let Some((row, column)) = self.drawn.take() {
            draw_frame(&mut world.screen, row, column, &self.frame, true);
        }

        let (id, entering) = match self.obstacle {
            Some(id) => (id, false),
            None => {
                let max_column = world.columns().saturating_sub(1) as f64;
                self.column = self.column.clamp(0.0, max_column);
                let id = world.obstacles.register(self.bounds());
                self.obstacle = Some(id);
                (id, true)
            }
        };

        if world.obstacles.take_mark(id, CollisionMark::Projectile) {
            let (row, column) = self.bounds().center();
            spawner.spawn(Explosion::new(row, column));
            return Ok(self.finish(world, DebrisState::Destroyed));
        }

        if !entering {
            self.row += self.speed;
        }
        if self.row >= world.rows() as f64 {
            return Ok(self.finish(world, DebrisState::Escaped));
        }

        world.obstacles.update(id, self.bounds());
        draw_frame(&mut world.screen, self.row, self.column, &self.frame, false);
        self.drawn = Some((self.row, self.column));
        Ok(Step::Suspended)
    }
}
