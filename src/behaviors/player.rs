use crate::audio::Cue;
use crate::behaviors::game_over::GameOver;
use crate::behaviors::gunfire::Gunfire;
use crate::canvas::{draw_frame, frame_size};
use crate::collision;
use crate::entities::{BoundingBox, CollisionMark, PlayerState};
use crate::error::TaskError;
use crate::physics::next_velocity;
use crate::scheduler::{Spawner, Step, Task};
use crate::world::World;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerMode {
    Flying,
    Destroyed,
}

/// The player's spaceship.
///
/// Each tick: steer from the current controls, clamp to the screen, fire if
/// the weapon is unlocked, then check for a crash.  A crash spawns the
/// game-over banner and ends the task.
pub struct Spaceship {
    state: PlayerState,
    mode: PlayerMode,
    ticks: u64,
    drawn: Option<(f64, f64, usize)>,
}

impl Spaceship {
    pub fn new(row: f64, column: f64) -> Self {
        Self {
            state: PlayerState::at(row, column),
            mode: PlayerMode::Flying,
            ticks: 0,
            drawn: None,
        }
    }

    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    fn frame_index(&self, world: &World) -> usize {
        let hold = u64::from(world.config.entities.spaceship_frame_ticks.max(1));
        ((self.ticks / hold) as usize) % world.frames.spaceship.len()
    }
}

impl Task<World> for Spaceship {
    fn name(&self) -> &'static str {
        "spaceship"
    }

    fn resume(&mut self, world: &mut World, spawner: &mut Spawner<World>) -> Result<Step, TaskError> {
        if world.frames.spaceship.is_empty() {
            return Err(TaskError::NoFrames("spaceship"));
        }

        if let Some((row, column, idx)) = self.drawn.take() {
            draw_frame(&mut world.screen, row, column, &world.frames.spaceship[idx], true);
        }

        let idx = self.frame_index(world);
        let (rows, columns) = frame_size(&world.frames.spaceship[idx]);
        let controls = world.controls;

        let (row_speed, column_speed) = next_velocity(
            self.state.row_speed,
            self.state.column_speed,
            controls.rows_direction,
            controls.columns_direction,
            &world.config.motion,
        );
        self.state.row_speed = row_speed;
        self.state.column_speed = column_speed;

        let max_row = world.rows().saturating_sub(rows) as f64;
        let max_column = world.columns().saturating_sub(columns) as f64;
        self.state.row = (self.state.row + row_speed).clamp(0.0, max_row);
        self.state.column = (self.state.column + column_speed).clamp(0.0, max_column);

        if controls.fire && world.progression.weapon_unlocked() {
            let entities = &world.config.entities;
            spawner.spawn(Gunfire::new(
                self.state.row,
                self.state.column + (columns / 2) as f64,
                entities.gunfire_row_speed,
                entities.gunfire_column_speed,
            ));
            world.cues.push(Cue::Fire);
        }

        let footprint = BoundingBox::new(self.state.row, self.state.column, rows, columns);
        if let Some(id) = collision::player_hit(&mut world.obstacles, &footprint) {
            log::info!("spaceship crashed into obstacle {:?}", id);
            // The crash mark is consumed here by the game-over transition.
            world.obstacles.take_mark(id, CollisionMark::Player);
            self.mode = PlayerMode::Destroyed;
            self.state.alive = false;
            world.player = self.state;
            spawner.spawn(GameOver);
            return Ok(Step::Completed);
        }

        draw_frame(&mut world.screen, self.state.row, self.state.column, &world.frames.spaceship[idx], false);
        self.drawn = Some((self.state.row, self.state.column, idx));
        self.ticks += 1;
        world.player = self.state;
        Ok(Step::Suspended)
    }
}
