//! Shared state every task is resumed with.
//!
//! Owned by the game loop and handed to the scheduler by `&mut`, so only the
//! task currently running can touch it.

use rand::rngs::StdRng;

use crate::assets::FrameSet;
use crate::audio::Cue;
use crate::canvas::Grid;
use crate::config::Config;
use crate::entities::{Controls, PlayerState};
use crate::progression::Progression;
use crate::registry::ObstacleRegistry;

pub struct World {
    pub config: Config,
    pub progression: Progression,
    pub obstacles: ObstacleRegistry,
    pub screen: Grid,
    /// Input for the current tick.
    pub controls: Controls,
    /// Last state published by the player task.
    pub player: PlayerState,
    pub frames: FrameSet,
    pub rng: StdRng,
    /// Cues raised this tick, drained by the game loop.
    pub cues: Vec<Cue>,
}

impl World {
    pub fn new(config: Config, frames: FrameSet, rows: usize, columns: usize, rng: StdRng) -> Self {
        let progression = Progression::new(config.progression.clone());
        Self {
            config,
            progression,
            obstacles: ObstacleRegistry::new(),
            screen: Grid::new(rows, columns),
            controls: Controls::default(),
            player: PlayerState::at(rows as f64 / 2.0, columns as f64 / 2.0),
            frames,
            rng,
            cues: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.screen.rows()
    }

    pub fn columns(&self) -> usize {
        self.screen.columns()
    }

    pub fn game_over(&self) -> bool {
        !self.player.alive
    }
}
