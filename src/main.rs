mod display;

use std::fs::File;
use std::io::{stdout, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{cursor, event, terminal, ExecutableCommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use space_garbage::assets::FrameSet;
use space_garbage::audio::TerminalBell;
use space_garbage::input::poll_input;
use space_garbage::{Config, Game, GameError, World};

/// Shoot down space garbage before it hits your ship.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON config file; missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding `<category>_*.txt` frame files.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Seed for the world RNG (random if omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of background stars.
    #[arg(long)]
    stars: Option<usize>,

    /// Write logs here (filter with RUST_LOG).  No logging without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop<W: std::io::Write>(
    out: &mut W,
    game: &mut Game,
    rx: &mpsc::Receiver<event::Event>,
    tick: Duration,
) -> Result<(), GameError> {
    let mut bell = TerminalBell::new(stdout());

    loop {
        let frame_start = Instant::now();

        let input = poll_input(rx);
        if input.quit {
            log::info!("quit requested");
            return Ok(());
        }

        game.step(input.controls);
        display::render(out, &game.world.screen, &game.overlay())?;
        game.drain_cues(&mut bell);

        let elapsed = frame_start.elapsed();
        if elapsed < tick {
            thread::sleep(tick - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(stars) = cli.stars {
        config.playfield.star_count = stars;
    }
    config.validate()?;

    let frames = match &cli.assets {
        Some(dir) => FrameSet::load(dir),
        None => FrameSet::builtin(),
    };
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (columns, rows) = terminal::size()?;
    if rows < 3 || columns < 3 {
        return Err(GameError::TerminalTooSmall { rows, columns });
    }
    // Last terminal row is reserved for the overlay.
    let world = World::new(config, frames, rows as usize - 1, columns as usize, rng);
    let tick = Duration::from_millis(world.config.playfield.tick_ms);
    let mut game = Game::new(world);

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread to blocking event reads so the loop never blocks on I/O.
    let (tx, rx) = mpsc::channel::<event::Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = game_loop(&mut out, &mut game, &rx, tick);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
