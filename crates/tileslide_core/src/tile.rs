//! Tile identity and placement.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};

/// Reference to a tile's image asset.
///
/// The engine never opens the file; the reference exists so the
/// presentation layer and the menu know what to draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileImage(String);

impl TileImage {
    /// Creates an image reference from a path or asset name.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the underlying path.
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TileImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TileImage {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// A single tile on the board.
///
/// Tiles carry their home cell for solved checks and their current cell for
/// placement. They are created when a puzzle loads, mutated only by grid
/// swaps, and replaced wholesale when the next puzzle loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    image: TileImage,
    home: Cell,
    current: Cell,
    blank: bool,
}

impl Tile {
    /// Creates a tile sitting on its home cell.
    pub fn new(image: TileImage, home: Cell, blank: bool) -> Self {
        Self {
            image,
            home,
            current: home,
            blank,
        }
    }

    /// Returns the image reference.
    pub fn image(&self) -> &TileImage {
        &self.image
    }

    /// Returns the home cell.
    pub fn home(&self) -> Cell {
        self.home
    }

    /// Returns the cell the tile currently occupies.
    pub fn current(&self) -> Cell {
        self.current
    }

    /// True for the one tile drawn as the empty cell.
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// True when the tile sits on its home cell.
    pub fn is_home(&self) -> bool {
        self.current == self.home
    }

    /// Places the tile on a new cell.
    ///
    /// Unchecked: [`GridModel::swap`](crate::GridModel::swap) is responsible
    /// for keeping the grid arrangement and tile positions consistent.
    pub(crate) fn move_to(&mut self, cell: Cell) {
        self.current = cell;
    }

    /// Corruption hook for invariant tests.
    #[cfg(test)]
    pub(crate) fn set_blank(&mut self, blank: bool) {
        self.blank = blank;
    }
}
