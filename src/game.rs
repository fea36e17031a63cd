/// Composition root: owns the world and the scheduler and advances both by
/// one tick at a time.

use rand::Rng;

use crate::audio::AudioSink;
use crate::behaviors::{Blink, DebrisSpawner, Spaceship};
use crate::entities::Controls;
use crate::scheduler::{Scheduler, TickReport};
use crate::world::World;

pub struct Game {
    pub world: World,
    pub scheduler: Scheduler<World>,
    last_phrase: Option<String>,
}

impl Game {
    /// An empty game: no tasks registered.
    pub fn empty(world: World) -> Self {
        Self {
            world,
            scheduler: Scheduler::new(),
            last_phrase: None,
        }
    }

    /// Stars, the debris spawner and the spaceship in the middle of the screen.
    pub fn new(mut world: World) -> Self {
        let mut scheduler = Scheduler::new();
        let (rows, columns) = (world.rows(), world.columns());

        let symbols: Vec<char> = world.config.playfield.star_symbols.chars().collect();
        if rows > 2 && columns > 2 && !symbols.is_empty() {
            for _ in 0..world.config.playfield.star_count {
                let row = world.rng.gen_range(1..rows - 1);
                let column = world.rng.gen_range(1..columns - 1);
                let symbol = symbols[world.rng.gen_range(0..symbols.len())];
                scheduler.spawn(Blink::new(row, column, symbol));
            }
        }
        scheduler.spawn(DebrisSpawner::new());
        scheduler.spawn(Spaceship::new(rows as f64 / 2.0, columns as f64 / 2.0));

        log::info!(
            "game started: {}x{} playfield, {} task(s)",
            rows,
            columns,
            scheduler.len()
        );
        Self {
            world,
            scheduler,
            last_phrase: None,
        }
    }

    /// One tick: advance the clock, publish input, resume every task once.
    pub fn step(&mut self, controls: Controls) -> TickReport {
        self.world.progression.advance_tick();
        self.world.controls = controls;
        let report = self.scheduler.tick(&mut self.world);

        let phrase = self.world.progression.phrase();
        if phrase != self.last_phrase.as_deref() {
            if let Some(text) = phrase {
                log::info!("year {}: {}", self.world.progression.year().floor() as i64, text);
            }
            self.last_phrase = phrase.map(str::to_string);
        }
        report
    }

    pub fn drain_cues(&mut self, sink: &mut dyn AudioSink) {
        for cue in self.world.cues.drain(..) {
            sink.play(cue);
        }
    }

    /// Bottom-row text: the integer year and the current phrase.
    pub fn overlay(&self) -> String {
        let year = self.world.progression.year().floor() as i64;
        match self.world.progression.phrase() {
            Some(text) => format!("Year {year}  {text}"),
            None => format!("Year {year}"),
        }
    }
}
