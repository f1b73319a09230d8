//! File-backed collaborators and a scripted driver for the puzzle engine.
//!
//! The engine crate owns the rules; this crate owns everything that
//! touches disk. It discovers `.puz` files, persists the leaderboard,
//! reads TOML configuration, and wires the three together into a runnable
//! [session](tileslide_core::GameSession) fed by click scripts.
//!
//! # Example
//!
//! ```no_run
//! use tileslide_game::{parse_click_script, run_playthrough, GameConfig};
//!
//! # fn run() -> anyhow::Result<()> {
//! let config = GameConfig::load_or_default("tileslide.toml")?;
//! let clicks = parse_click_script("250 250\n725 585\n");
//! let summary = run_playthrough(&config, Some(7), Vec::new(), clicks)?;
//! println!("Finished after {} moves.", summary.moves());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod catalog;
mod config;
mod driver;
mod leaderboard;
mod loader;
mod presenter;

// Crate-level exports - Puzzle loading
pub use loader::{load_puzzle, LoadFailure, LoadFailureKind};

// Crate-level exports - Catalog
pub use catalog::{CatalogError, PuzzleCatalog, MENU_CAPACITY};

// Crate-level exports - Leaderboard
pub use leaderboard::{Leaderboard, Score, ScoreParseError, TOP_SCORES};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Presentation
pub use presenter::LogPresenter;

// Crate-level exports - Driver
pub use driver::{build_session, parse_click_script, run_playthrough, PlaySummary};
