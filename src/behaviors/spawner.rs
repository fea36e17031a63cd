use rand::seq::SliceRandom;
use rand::Rng;

use crate::behaviors::debris::DebrisFall;
use crate::error::TaskError;
use crate::scheduler::{Spawner, Step, Task};
use crate::world::World;

/// Drops new debris at the cadence the progression dictates.  Never completes.
#[derive(Default)]
pub struct DebrisSpawner {
    /// Ticks left before the next spawn attempt.
    wait: u32,
}

impl DebrisSpawner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Task<World> for DebrisSpawner {
    fn name(&self) -> &'static str {
        "spawner"
    }

    fn resume(&mut self, world: &mut World, spawner: &mut Spawner<World>) -> Result<Step, TaskError> {
        if self.wait > 0 {
            self.wait -= 1;
            return Ok(Step::Suspended);
        }

        // Not spawning yet: retry next tick.
        let Some(interval) = world.progression.spawn_interval() else {
            return Ok(Step::Suspended);
        };

        let frame = world
            .frames
            .debris
            .choose(&mut world.rng)
            .ok_or(TaskError::NoFrames("debris"))?
            .clone();
        let columns = world.columns().max(1);
        let column = world.rng.gen_range(0..columns) as f64;
        spawner.spawn(DebrisFall::new(frame, column, world.config.entities.debris_speed));

        self.wait = interval.max(1) - 1;
        Ok(Step::Suspended)
    }
}
