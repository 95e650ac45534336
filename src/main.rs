mod config;
mod error;
mod field;
mod game;
mod input;
mod render;
mod snake;
mod state;
mod term;

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::{IntervalStream, UnboundedReceiverStream};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use config::GameConfig;
use game::{SnakeGame, Termination};
use term::{Surface, TermManager};

pub type TermInt = u16;
pub type Coords = (i32, i32);

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let mut term = TermManager::new();
    if let Err(err) = term.setup() {
        restore(&mut term);
        return Err(err).context("failed to initialize terminal");
    }

    // The terminal is restored exactly once, however the game ends
    let result = play(&mut term, GameConfig::default()).await;
    restore(&mut term);

    result
}

async fn play(terminal: &mut TermManager, config: GameConfig) -> Result<()> {
    let rng = StdRng::seed_from_u64(clock_seed());
    let period = config.tick_interval;
    let crash_exit_delay = config.crash_exit_delay;

    let mut game = SnakeGame::new(terminal, rng, config).context("failed to start game")?;

    let keys = UnboundedReceiverStream::new(term::spawn_input_reader())
        .map(|ev| input::classify(&ev));

    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let ticks = IntervalStream::new(interval);

    match game.play(keys, ticks).await? {
        Termination::Quit => {}
        Termination::BorderCrash => {
            game.show_game_over()?;
            time::sleep(crash_exit_delay).await;
        }
    }

    Ok(())
}

fn restore(term: &mut TermManager) {
    if let Err(err) = term.close() {
        warn!(%err, "failed to restore terminal");
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Logs go to stderr so they never land on the game screen.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
