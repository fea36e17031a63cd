//! Simulated timeline and the difficulty curve derived from it.
//!
//! The free functions are pure: they only look at the elapsed year and the
//! static tables in [`ProgressionConfig`].  [`Progression`] adds the single
//! piece of mutable state, the year counter itself.

use crate::config::ProgressionConfig;

/// Ticks between debris spawns at `year`, or `None` before spawning starts.
///
/// The table is sorted by year; the last step whose `from_year <= year` wins.
pub fn spawn_interval(config: &ProgressionConfig, year: f64) -> Option<u32> {
    let idx = config.spawn_table.partition_point(|s| s.from_year <= year);
    idx.checked_sub(1).map(|i| config.spawn_table[i].interval)
}

pub fn weapon_unlocked(config: &ProgressionConfig, year: f64) -> bool {
    year >= config.weapon_year
}

/// Sticky lookup: the text of the latest entry at or before the integer year.
pub fn current_phrase(config: &ProgressionConfig, year: f64) -> Option<&str> {
    let key = year.floor() as i64;
    let idx = config.phrases.partition_point(|p| p.year <= key);
    idx.checked_sub(1).map(|i| config.phrases[i].text.as_str())
}

#[derive(Debug, Clone)]
pub struct Progression {
    config: ProgressionConfig,
    origin: f64,
    year: f64,
    ticks: u64,
}

impl Progression {
    pub fn new(config: ProgressionConfig) -> Self {
        let year = config.start_year;
        Self::starting_at(config, year)
    }

    /// Start at an arbitrary point on the timeline.
    pub fn starting_at(config: ProgressionConfig, year: f64) -> Self {
        Self {
            config,
            origin: year,
            year,
            ticks: 0,
        }
    }

    pub fn advance_tick(&mut self) {
        self.ticks += 1;
        // Recomputed from the tick count, never summed.
        self.year = self.origin + self.ticks as f64 * self.config.year_step;
    }

    pub fn year(&self) -> f64 {
        self.year
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn spawn_interval(&self) -> Option<u32> {
        spawn_interval(&self.config, self.year)
    }

    pub fn weapon_unlocked(&self) -> bool {
        weapon_unlocked(&self.config, self.year)
    }

    pub fn phrase(&self) -> Option<&str> {
        current_phrase(&self.config, self.year)
    }
}
