//! Unique occupancy invariant: every cell holds exactly one tile.

use super::Invariant;
use crate::grid::GridModel;

/// Invariant: tile positions form a permutation of the grid's cells.
///
/// No two tiles share a cell and no cell is vacant. Swapping two tiles
/// preserves this by construction; any other mutation path must prove it.
pub struct UniqueOccupancyInvariant;

impl Invariant<GridModel> for UniqueOccupancyInvariant {
    fn holds(grid: &GridModel) -> bool {
        let width = grid.width();
        let mut seen = vec![false; width * width];

        for tile in grid.tiles() {
            let current = tile.current();
            if current.x() >= width || current.y() >= width {
                return false;
            }
            let index = current.y() * width + current.x();
            if seen[index] {
                return false;
            }
            seen[index] = true;
        }

        seen.into_iter().all(|occupied| occupied)
    }

    fn description() -> &'static str {
        "Tile positions form a permutation of the grid cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::puzzle::PuzzleDefinition;
    use crate::tile::TileImage;

    fn solved(width: usize) -> GridModel {
        let count = width * width;
        let images = (0..count)
            .map(|i| TileImage::new(format!("tile{i}.gif")))
            .collect();
        let puzzle = PuzzleDefinition::new(
            format!("{width}x{width}"),
            count,
            100,
            images,
            TileImage::new("thumb.gif"),
        );
        GridModel::from_definition(&puzzle)
    }

    #[test]
    fn test_fresh_grid_holds() {
        let grid = solved(3);
        assert!(UniqueOccupancyInvariant::holds(&grid));
    }

    #[test]
    fn test_swapped_grid_holds() {
        let mut grid = solved(3);
        let blank = grid.blank_location();
        grid.swap(blank, Cell::new(blank.x(), blank.y() - 1));
        assert!(UniqueOccupancyInvariant::holds(&grid));
    }

    #[test]
    fn test_stacked_tiles_violate() {
        let mut grid = solved(3);
        grid.override_tile_position(0, Cell::new(1, 0));
        assert!(!UniqueOccupancyInvariant::holds(&grid));
    }

    #[test]
    fn test_escaped_tile_violates() {
        let mut grid = solved(3);
        grid.override_tile_position(0, Cell::new(7, 7));
        assert!(!UniqueOccupancyInvariant::holds(&grid));
    }
}
