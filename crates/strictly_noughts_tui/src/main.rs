//! Strictly Noughts - terminal front end
//!
//! Play noughts and crosses against the heuristic bot, or run headless
//! matches against a random player.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod autoplay;
mod cli;
mod config;
mod controller;
mod input;
mod logging;
mod presenter;
mod screen;
mod timer;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::NoughtsConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use strictly_noughts::Game;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            seed,
            reset_delay_ms,
            no_sound,
        } => run_play(config, seed, reset_delay_ms, no_sound).await,
        Command::Autoplay {
            config,
            seed,
            rounds,
        } => run_autoplay(config, seed, rounds),
    }
}

/// Run the interactive terminal game
async fn run_play(
    path: PathBuf,
    seed: Option<u64>,
    reset_delay_ms: Option<u64>,
    no_sound: bool,
) -> Result<()> {
    let mut config = NoughtsConfig::load_or_default(&path).context("Failed to load config")?;
    if let Some(seed) = seed {
        config = config.with_seed(Some(seed));
    }
    if let Some(ms) = reset_delay_ms {
        config = config.with_reset_delay_ms(ms);
    }
    if no_sound {
        config = config.with_sound(false);
    }

    logging::init_file(config.log_file())?;
    info!(?config, "Configuration resolved");

    tui::run(config).await
}

/// Run headless rounds against a random player
fn run_autoplay(path: PathBuf, seed: Option<u64>, rounds: u32) -> Result<()> {
    logging::init_stderr();

    let config = NoughtsConfig::load_or_default(&path).context("Failed to load config")?;
    let seed = seed.or(*config.seed());
    info!(?seed, rounds, "Starting autoplay");

    let (mut game, mut player_rng) = match seed {
        Some(seed) => (
            Game::with_seed(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (Game::new(), StdRng::from_os_rng()),
    };

    let tally = autoplay::run(&mut game, &mut player_rng, rounds);

    println!("Rounds:      {}", tally.rounds());
    println!("Player wins: {}", tally.player_wins());
    println!("Bot wins:    {}", tally.bot_wins());
    println!("Draws:       {}", tally.draws());
    Ok(())
}
