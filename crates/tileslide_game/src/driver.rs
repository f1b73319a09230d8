//! Wires the session to its file-backed collaborators and runs it.

use crate::catalog::PuzzleCatalog;
use crate::config::GameConfig;
use crate::leaderboard::Leaderboard;
use crate::presenter::LogPresenter;
use anyhow::Result;
use derive_getters::Getters;
use derive_new::new;
use tileslide_core::{ClickOutcome, GameSession, PointerClick, SessionState};
use tracing::{info, instrument, warn};

/// How a finished run ended.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct PlaySummary {
    /// State the session ended in.
    state: SessionState,
    /// Moves taken on the final board.
    moves: u32,
}

/// Builds a session from configuration: scanned catalog, loaded
/// leaderboard, and a log-backed presenter.
///
/// Filenames in `manual_queue` answer the menu's manual-entry button in
/// order, one per click.
#[instrument(skip(config, manual_queue))]
pub fn build_session(
    config: &GameConfig,
    seed: Option<u64>,
    manual_queue: Vec<String>,
) -> Result<GameSession> {
    let mut catalog = PuzzleCatalog::scan(config.puzzle_dir(), config.asset_base())?;
    if catalog.is_empty() {
        warn!(path = %config.puzzle_dir().display(), "No playable puzzles found");
    }
    for filename in manual_queue {
        catalog.queue_manual(filename);
    }

    if let Some(parent) = config.leaderboard_file().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let leaderboard = Leaderboard::load(config.leaderboard_file().clone());

    let session = GameSession::new(
        config.session_settings(),
        Box::new(catalog),
        Box::new(leaderboard),
        Box::new(LogPresenter),
    );
    Ok(match seed {
        Some(seed) => session.with_seed(seed),
        None => session,
    })
}

/// Starts a session and feeds it a scripted click sequence.
///
/// The run ends at the quit click, after the session's grace period, or
/// when the script runs out.
#[instrument(skip(config, manual_queue, clicks))]
pub fn run_playthrough(
    config: &GameConfig,
    seed: Option<u64>,
    manual_queue: Vec<String>,
    clicks: impl IntoIterator<Item = PointerClick>,
) -> Result<PlaySummary> {
    let mut session = build_session(config, seed, manual_queue)?;
    session.start()?;

    for click in clicks {
        if let ClickOutcome::Quit { delay } = session.handle_click(click) {
            info!(?delay, "Quit requested, waiting out the grace period");
            std::thread::sleep(delay);
            break;
        }
    }

    let summary = PlaySummary::new(session.state(), session.moves());
    info!(state = %summary.state(), moves = *summary.moves(), "Playthrough finished");
    Ok(summary)
}

/// Parses a click script: one `x y` pair per line, with `#` comments and
/// blank lines skipped.
#[instrument(skip(input))]
pub fn parse_click_script(input: &str) -> Vec<PointerClick> {
    let mut clicks = Vec::new();
    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split_whitespace();
        let coords = (
            parts.next().and_then(|x| x.parse().ok()),
            parts.next().and_then(|y| y.parse().ok()),
        );
        match coords {
            (Some(x), Some(y)) => clicks.push(PointerClick::new(x, y)),
            _ => warn!(line, "Ignoring unparseable click line"),
        }
    }
    clicks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_parses_pairs_and_skips_noise() {
        let script = "# warm-up\n250 250\n\n  725 585  \nnot a click\n";
        let clicks = parse_click_script(script);
        assert_eq!(clicks.len(), 2);
        assert_eq!(clicks[0], PointerClick::new(250.0, 250.0));
        assert_eq!(clicks[1], PointerClick::new(725.0, 585.0));
    }

    #[test]
    fn test_script_accepts_fractional_coordinates() {
        let clicks = parse_click_script("120.5 360.25");
        assert_eq!(clicks, vec![PointerClick::new(120.5, 360.25)]);
    }
}
