//! Error types for configuration, assets, tasks and the game as a whole.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised while loading animation frames from disk.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("cannot read frames from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no frames found for category `{0}`")]
    NoFrames(String),

    #[error("frame {path} is empty")]
    EmptyFrame { path: PathBuf },
}

/// A transient fault inside a single task.  The scheduler drops the task and
/// keeps the rest of the world running.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("frame set `{0}` has no frames")]
    NoFrames(&'static str),

    #[error("empty frame in `{0}`")]
    EmptyFrame(&'static str),
}

/// Top-level error for the binary.
#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("terminal too small: {rows}x{columns}")]
    TerminalTooSmall { rows: u16, columns: u16 },
}
