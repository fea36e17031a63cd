use crate::canvas::{draw_frame, frame_size};
use crate::error::TaskError;
use crate::scheduler::{Spawner, Step, Task};
use crate::world::World;

/// Redraws the game-over banner in the middle of the screen every tick.
/// Never completes.
#[derive(Default)]
pub struct GameOver;

impl Task<World> for GameOver {
    fn name(&self) -> &'static str {
        "game_over"
    }

    fn resume(&mut self, world: &mut World, _spawner: &mut Spawner<World>) -> Result<Step, TaskError> {
        let banner = &world.frames.game_over;
        let (rows, columns) = frame_size(banner);
        let row = (world.rows() as f64 - rows as f64) / 2.0;
        let column = (world.columns() as f64 - columns as f64) / 2.0;
        draw_frame(&mut world.screen, row.max(0.0), column.max(0.0), banner, false);
        Ok(Step::Suspended)
    }
}
