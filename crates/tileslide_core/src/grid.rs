//! The grid model: tile placement, blank cache, and solved checks.

use crate::cell::Cell;
use crate::puzzle::PuzzleDefinition;
use crate::tile::Tile;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A width×width arrangement of tiles with one blank.
///
/// The grid maintains a bijection between cells and tiles: every cell holds
/// exactly one tile, exactly one tile is flagged blank, and the cached blank
/// location always names the blank tile's actual cell. [`GridModel::swap`]
/// is the only mutation during play and performs no legality checking of its
/// own: the shuffle bypasses adjacency rules deliberately, and the session
/// enforces them for player moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridModel {
    /// Edge length in cells.
    width: usize,
    /// Tiles in row-major order: index = y * width + x.
    tiles: Vec<Tile>,
    /// Cached location of the blank tile, kept in sync by every swap.
    blank: Cell,
}

impl GridModel {
    /// Builds a fresh solved grid from puzzle data.
    ///
    /// Tiles take their home cells in image order; the final image becomes
    /// the blank in the bottom-right corner.
    #[instrument(skip(puzzle), fields(name = %puzzle.name(), tiles = puzzle.tile_count()))]
    pub fn from_definition(puzzle: &PuzzleDefinition) -> Self {
        let width = puzzle.width();
        let last = puzzle.tile_images().len().saturating_sub(1);
        let tiles = puzzle
            .tile_images()
            .iter()
            .enumerate()
            .map(|(index, image)| {
                let home = Cell::new(index % width, index / width);
                Tile::new(image.clone(), home, index == last)
            })
            .collect();
        let blank = Cell::new(width - 1, width - 1);
        debug!(width, "grid built");
        Self {
            width,
            tiles,
            blank,
        }
    }

    /// Grid edge length in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of tiles, including the blank.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// All tiles in row-major cell order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterates every cell of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width;
        (0..width * width).map(move |index| Cell::new(index % width, index / width))
    }

    /// The tile occupying `cell`.
    ///
    /// # Panics
    ///
    /// Panics when `cell` lies outside the grid. Out-of-range access is a
    /// caller bug, not a runtime condition to recover from.
    pub fn tile_at(&self, cell: Cell) -> &Tile {
        &self.tiles[self.index(cell)]
    }

    /// Current location of the blank.
    pub fn blank_location(&self) -> Cell {
        self.blank
    }

    /// Unconditionally exchanges the tiles at two cells and updates each
    /// tile's recorded position, plus the blank cache when the blank is
    /// involved.
    ///
    /// No adjacency or blank-involvement checks happen here; callers own
    /// legality.
    ///
    /// # Panics
    ///
    /// Panics when either cell lies outside the grid.
    #[instrument(skip(self))]
    pub fn swap(&mut self, a: Cell, b: Cell) {
        let index_a = self.index(a);
        let index_b = self.index(b);
        self.tiles.swap(index_a, index_b);
        self.tiles[index_a].move_to(a);
        self.tiles[index_b].move_to(b);
        if self.tiles[index_a].is_blank() {
            self.blank = a;
        } else if self.tiles[index_b].is_blank() {
            self.blank = b;
        }
    }

    /// True when the tile at `cell` sits on its home cell.
    ///
    /// # Panics
    ///
    /// Panics when `cell` lies outside the grid.
    pub fn is_home(&self, cell: Cell) -> bool {
        self.tile_at(cell).is_home()
    }

    /// True when every tile sits on its home cell.
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(Tile::is_home)
    }

    /// Snaps every tile back to its home cell.
    ///
    /// The arrangement is re-indexed by home position, not by prior
    /// position, and the blank cache lands back on the blank's home in the
    /// bottom-right corner. This is not an undo: it reaches the solved
    /// state unconditionally and is used before re-shuffling.
    #[instrument(skip(self))]
    pub fn reset_to_home(&mut self) {
        let width = self.width;
        self.tiles
            .sort_by_key(|tile| tile.home().y() * width + tile.home().x());
        for tile in &mut self.tiles {
            let home = tile.home();
            tile.move_to(home);
            if tile.is_blank() {
                self.blank = home;
            }
        }
        debug!("grid reset to home");
    }

    fn index(&self, cell: Cell) -> usize {
        assert!(
            cell.x() < self.width && cell.y() < self.width,
            "cell {cell} out of range for width {}",
            self.width
        );
        cell.y() * self.width + cell.x()
    }
}

#[cfg(test)]
impl GridModel {
    /// Corruption hooks for invariant tests.
    pub(crate) fn override_blank_cache(&mut self, cell: Cell) {
        self.blank = cell;
    }

    pub(crate) fn override_tile_position(&mut self, index: usize, cell: Cell) {
        self.tiles[index].move_to(cell);
    }

    pub(crate) fn override_blank_flag(&mut self, index: usize, blank: bool) {
        self.tiles[index].set_blank(blank);
    }
}
