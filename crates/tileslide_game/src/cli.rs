//! Command-line interface for tileslide_game.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tileslide - a sliding-tile puzzle game driven by click scripts
#[derive(Parser, Debug)]
#[command(name = "tileslide_game")]
#[command(about = "Sliding-tile puzzle game driven by click scripts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a scripted game session
    Play {
        /// Path to the configuration file
        #[arg(short, long, default_value = "tileslide.toml")]
        config: PathBuf,

        /// Seed for the shuffle generator, random when omitted
        #[arg(short, long)]
        seed: Option<u64>,

        /// Click script file, read from stdin when omitted
        #[arg(long)]
        script: Option<PathBuf>,

        /// Puzzle filename answering the next manual-entry click, repeatable
        #[arg(short = 'q', long = "queue")]
        queue: Vec<String>,
    },
    /// List the puzzles the load menu would offer
    Catalog {
        /// Path to the configuration file
        #[arg(short, long, default_value = "tileslide.toml")]
        config: PathBuf,
    },
    /// Print the current leaderboard standings
    Scores {
        /// Path to the configuration file
        #[arg(short, long, default_value = "tileslide.toml")]
        config: PathBuf,
    },
}
