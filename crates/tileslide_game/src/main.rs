//! Tileslide, a sliding-tile puzzle game driven by click scripts.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tileslide_game::{
    parse_click_script, run_playthrough, GameConfig, Leaderboard, PuzzleCatalog, MENU_CAPACITY,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Play {
            config,
            seed,
            script,
            queue,
        } => run_play(config, seed, script, queue),
        Command::Catalog { config } => run_catalog(config),
        Command::Scores { config } => run_scores(config),
    }
}

/// Run a scripted game session
fn run_play(
    config_path: PathBuf,
    seed: Option<u64>,
    script: Option<PathBuf>,
    queue: Vec<String>,
) -> Result<()> {
    info!("Starting tileslide session");
    let config = GameConfig::load_or_default(&config_path)?;

    let input = match script {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };
    let clicks = parse_click_script(&input);
    info!(clicks = clicks.len(), "Click script parsed");

    let summary = run_playthrough(&config, seed, queue, clicks)?;
    println!(
        "Session ended in state {} after {} moves.",
        summary.state(),
        summary.moves()
    );
    Ok(())
}

/// List the puzzles the load menu would offer
fn run_catalog(config_path: PathBuf) -> Result<()> {
    let config = GameConfig::load_or_default(&config_path)?;
    let catalog = PuzzleCatalog::scan(config.puzzle_dir(), config.asset_base())?;

    println!(
        "{} puzzle(s) in {}:",
        catalog.len(),
        config.puzzle_dir().display()
    );
    for (file, puzzle) in catalog.puzzles() {
        println!(
            "  {file}: {} ({} tiles, {}px)",
            puzzle.name(),
            puzzle.tile_count(),
            puzzle.tile_size()
        );
    }
    if catalog.len() > MENU_CAPACITY {
        println!("The load menu shows only the first {MENU_CAPACITY}.");
    }
    Ok(())
}

/// Print the current leaderboard standings
fn run_scores(config_path: PathBuf) -> Result<()> {
    let config = GameConfig::load_or_default(&config_path)?;
    let leaderboard = Leaderboard::load(config.leaderboard_file().clone());

    println!("Leaders:");
    print!("{}", leaderboard.top_ten());
    Ok(())
}
