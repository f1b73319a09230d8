//! Collaborator seams the session drives but never implements.
//!
//! Puzzle storage and score persistence live behind these traits so the
//! session stays free of filesystem and format concerns.

use crate::puzzle::PuzzleDefinition;
use crate::tile::TileImage;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One selectable puzzle in the load menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct CatalogEntry {
    /// Identifier the session hands back to [`PuzzleSource::puzzle`].
    id: String,
    /// Image drawn on the menu sheet for this entry.
    thumbnail: TileImage,
}

/// Supplies puzzles to the session.
///
/// Loading can fail for many reasons the session does not distinguish:
/// every miss surfaces as `None`, and the implementation reports the
/// specifics on its own channel.
pub trait PuzzleSource {
    /// Menu entries, at most the menu sheet's capacity. When the backing
    /// catalog holds more, [`PuzzleSource::overflow`] says so.
    fn entries(&self) -> &[CatalogEntry];

    /// Whether the catalog held more puzzles than [`PuzzleSource::entries`]
    /// returns.
    fn overflow(&self) -> bool;

    /// Resolves a menu entry id to its full definition.
    fn puzzle(&self, id: &str) -> Option<PuzzleDefinition>;

    /// Loads a puzzle by file name, bypassing the menu.
    fn load_file(&mut self, name: &str) -> Option<PuzzleDefinition>;

    /// Asks the player for a file name and loads it. Returns `None` when
    /// the player declines or the load fails.
    fn request_manual(&mut self) -> Option<PuzzleDefinition>;
}

/// Receives finished-game scores.
pub trait ScoreSink {
    /// Records that `player` solved a puzzle in `moves` moves.
    fn record(&mut self, moves: u32, player: &str);
}
