//! Animation frames for each entity category.
//!
//! Frames are plain text files named `<category>_<anything>.txt` inside the
//! asset directory, loaded once before the game starts.  Categories that are
//! missing on disk fall back to the built-in frames below.

use std::path::{Path, PathBuf};

use crate::error::AssetError;

pub const SPACESHIP: &str = "spaceship";
pub const DEBRIS: &str = "debris";
pub const EXPLOSION: &str = "explosion";
pub const GAME_OVER: &str = "game_over";

const SPACESHIP_FRAMES: &[&str] = &[
    "  .\n .'.\n |o|\n.'o'.\n|.-.|\n'   '\n ( )\n  )",
    "  .\n .'.\n |o|\n.'o'.\n|.-.|\n'   '\n ( )\n  (",
];

const DEBRIS_FRAMES: &[&str] = &[
    " _____\n|     |\n| [] |\n|_____|",
    "  ,-.\n / \\_\\\n(  o )\n `--'",
    "|\\  /|\n| \\/ |\n|/\\  |\n|  \\/|\n`----'",
    "  __\n /__\\\n|####|\n|####|\n \\__/",
];

const EXPLOSION_FRAMES: &[&str] = &[
    "   (_)\n (  (  (\n  ( ) )",
    "  (  )\n (  )  )\n( )  ()\n  (  )",
    " (    )\n(  )   )\n ( )  ()\n(     )",
    "  .  .\n .   .\n  . .",
];

const GAME_OVER_FRAMES: &[&str] = &[
    "  ____    _    __  __ _____    _____     _______ ____  \n / ___|  / \\  |  \\/  | ____|  / _ \\ \\   / / ____|  _ \\ \n| |  _  / _ \\ | |\\/| |  _|   | | | \\ \\ / /|  _| | |_) |\n| |_| |/ ___ \\| |  | | |___  | |_| |\\ V / | |___|  _ < \n \\____/_/   \\_\\_|  |_|_____|  \\___/  \\_/  |_____|_| \\_\\",
];

fn builtin(category: &str) -> Vec<String> {
    let frames = match category {
        SPACESHIP => SPACESHIP_FRAMES,
        DEBRIS => DEBRIS_FRAMES,
        EXPLOSION => EXPLOSION_FRAMES,
        GAME_OVER => GAME_OVER_FRAMES,
        _ => &[],
    };
    frames.iter().map(|f| f.to_string()).collect()
}

/// Load every frame of `category` from `dir`, sorted by file name.
pub fn load_entity_frames(dir: &Path, category: &str) -> Result<Vec<String>, AssetError> {
    let prefix = format!("{category}_");
    let mut paths: Vec<PathBuf> = Vec::new();
    let dir_err = |source| AssetError::Io {
        path: dir.to_path_buf(),
        source,
    };
    for entry in std::fs::read_dir(dir).map_err(dir_err)? {
        let path = entry.map_err(dir_err)?.path();
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(&prefix) && n.ends_with(".txt"));
        if matches {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        return Err(AssetError::NoFrames(category.to_string()));
    }

    let mut frames = Vec::with_capacity(paths.len());
    for path in paths {
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(source) => return Err(AssetError::Io { path, source }),
        };
        if text.trim().is_empty() {
            return Err(AssetError::EmptyFrame { path });
        }
        frames.push(text);
    }
    Ok(frames)
}

/// All frames the entity behaviours draw.
#[derive(Clone, Debug)]
pub struct FrameSet {
    pub spaceship: Vec<String>,
    pub debris: Vec<String>,
    pub explosion: Vec<String>,
    pub game_over: String,
}

impl FrameSet {
    pub fn builtin() -> Self {
        Self {
            spaceship: builtin(SPACESHIP),
            debris: builtin(DEBRIS),
            explosion: builtin(EXPLOSION),
            game_over: builtin(GAME_OVER).concat(),
        }
    }

    /// Load from `dir`.  A category that fails to load falls back to the
    /// built-in frames with a warning.
    pub fn load(dir: &Path) -> Self {
        let load = |category: &str| match load_entity_frames(dir, category) {
            Ok(frames) => {
                log::info!("Loaded {} {} frame(s)", frames.len(), category);
                frames
            }
            Err(err) => {
                log::warn!("{err}; using built-in {category} frames");
                builtin(category)
            }
        };

        Self {
            spaceship: load(SPACESHIP),
            debris: load(DEBRIS),
            explosion: load(EXPLOSION),
            game_over: load(GAME_OVER).swap_remove(0),
        }
    }
}
