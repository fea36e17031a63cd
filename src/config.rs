//! Game configuration.
//!
//! Every tunable constant lives here.  A JSON file may override any subset of
//! fields; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One step of the difficulty curve: from `from_year` on, a new piece of
/// debris appears every `interval` ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnStep {
    pub from_year: f64,
    pub interval: u32,
}

/// Narrative text shown from `year` until the next entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    pub year: i64,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldConfig {
    /// Fixed tick period in milliseconds.
    pub tick_ms: u64,
    pub star_count: usize,
    pub star_symbols: String,
    /// Inclusive range of ticks a star holds each blink phase.
    pub blink_min_ticks: u32,
    pub blink_max_ticks: u32,
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            star_count: 100,
            star_symbols: "+*.:'".to_string(),
            blink_min_ticks: 5,
            blink_max_ticks: 20,
        }
    }
}

/// Inertial steering constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub row_speed_limit: f64,
    pub column_speed_limit: f64,
    /// Peak speed change per tick while input is held.
    pub acceleration: f64,
    /// Multiplier applied to the speed every tick (friction).
    pub fading: f64,
    /// Speeds below this magnitude snap to zero.
    pub rest_threshold: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            row_speed_limit: 2.0,
            column_speed_limit: 2.0,
            acceleration: 0.75,
            fading: 0.8,
            rest_threshold: 0.1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    pub start_year: f64,
    pub year_step: f64,
    pub weapon_year: f64,
    pub spawn_table: Vec<SpawnStep>,
    pub phrases: Vec<Phrase>,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        let spawn = |from_year: f64, interval: u32| SpawnStep { from_year, interval };
        let phrase = |year: i64, text: &str| Phrase { year, text: text.to_string() };
        Self {
            start_year: 1957.0,
            year_step: 0.1,
            weapon_year: 2020.0,
            spawn_table: vec![
                spawn(1961.0, 20),
                spawn(1969.0, 14),
                spawn(1981.0, 10),
                spawn(1995.0, 8),
                spawn(2010.0, 6),
                spawn(2020.0, 2),
            ],
            phrases: vec![
                phrase(1957, "First Sputnik"),
                phrase(1961, "Gagarin flew!"),
                phrase(1969, "Armstrong got on the moon!"),
                phrase(1971, "First orbital space station Salute-1"),
                phrase(1981, "Flight of the Shuttle Columbia"),
                phrase(1998, "ISS start building"),
                phrase(2011, "Messenger launch to Mercury"),
                phrase(2020, "Take the plasma gun! Shoot the garbage!"),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    /// Rows per tick.
    pub debris_speed: f64,
    pub gunfire_row_speed: f64,
    pub gunfire_column_speed: f64,
    /// Ticks each spaceship animation frame is shown.
    pub spaceship_frame_ticks: u32,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            debris_speed: 0.5,
            gunfire_row_speed: -0.5,
            gunfire_column_speed: 0.0,
            spaceship_frame_ticks: 2,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playfield: PlayfieldConfig,
    pub motion: MotionConfig,
    pub progression: ProgressionConfig,
    pub entities: EntityConfig,
}

impl Config {
    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.playfield.tick_ms == 0 {
            return invalid("tick_ms must be positive".into());
        }
        if self.playfield.blink_min_ticks == 0
            || self.playfield.blink_min_ticks > self.playfield.blink_max_ticks
        {
            return invalid(format!(
                "blink range {}..={} is empty or zero",
                self.playfield.blink_min_ticks, self.playfield.blink_max_ticks
            ));
        }
        if self.playfield.star_count > 0 && self.playfield.star_symbols.is_empty() {
            return invalid("star_symbols must not be empty".into());
        }

        let m = &self.motion;
        if m.row_speed_limit <= 0.0 || m.column_speed_limit <= 0.0 {
            return invalid("speed limits must be positive".into());
        }
        if !(m.fading > 0.0 && m.fading < 1.0) {
            return invalid(format!("fading {} outside (0, 1)", m.fading));
        }
        if m.acceleration <= 0.0 || m.rest_threshold < 0.0 {
            return invalid("acceleration must be positive, rest_threshold non-negative".into());
        }

        let p = &self.progression;
        if p.year_step <= 0.0 {
            return invalid("year_step must be positive".into());
        }
        for step in &p.spawn_table {
            if step.interval == 0 {
                return invalid(format!("zero spawn interval from year {}", step.from_year));
            }
        }
        for pair in p.spawn_table.windows(2) {
            if pair[0].from_year >= pair[1].from_year {
                return invalid("spawn_table years must be strictly increasing".into());
            }
            if pair[0].interval <= pair[1].interval {
                return invalid("spawn_table intervals must be strictly decreasing".into());
            }
        }
        for pair in p.phrases.windows(2) {
            if pair[0].year >= pair[1].year {
                return invalid("phrase years must be strictly increasing".into());
            }
        }

        if self.entities.spaceship_frame_ticks == 0 {
            return invalid("spaceship_frame_ticks must be positive".into());
        }
        Ok(())
    }
}
