//! Space Garbage - a terminal arcade game about clearing orbital debris.
//!
//! Core modules:
//! - `scheduler`: cooperative task scheduler driving every entity
//! - `registry` / `collision`: obstacle boxes and hit detection
//! - `progression`: simulated timeline and difficulty curve
//! - `physics`: inertial steering for the spaceship
//! - `behaviors`: the entity tasks themselves
//! - `game`: per-tick composition of all of the above

pub mod assets;
pub mod audio;
pub mod behaviors;
pub mod canvas;
pub mod collision;
pub mod config;
pub mod entities;
pub mod error;
pub mod game;
pub mod input;
pub mod physics;
pub mod progression;
pub mod registry;
pub mod scheduler;
pub mod world;

pub use config::Config;
pub use error::{AssetError, ConfigError, GameError, TaskError};
pub use game::Game;
pub use world::World;
