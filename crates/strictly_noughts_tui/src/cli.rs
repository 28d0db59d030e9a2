//! Command-line interface for the noughts binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Noughts - noughts and crosses against a heuristic bot
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play noughts and crosses against a bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to the TOML config file (optional)
        #[arg(short, long, default_value = "noughts.toml")]
        config: PathBuf,

        /// Seed for the bot's random moves
        #[arg(long)]
        seed: Option<u64>,

        /// Milliseconds to show a finished board before clearing it
        #[arg(long)]
        reset_delay_ms: Option<u64>,

        /// Disable the terminal bell
        #[arg(long)]
        no_sound: bool,
    },

    /// Let a random player face the bot without a terminal UI
    Autoplay {
        /// Path to the TOML config file (optional)
        #[arg(short, long, default_value = "noughts.toml")]
        config: PathBuf,

        /// Seed for both the bot and the random player
        #[arg(long)]
        seed: Option<u64>,

        /// Number of rounds to play
        #[arg(short, long, default_value = "100")]
        rounds: u32,
    },
}
