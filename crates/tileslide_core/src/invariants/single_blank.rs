//! Single blank invariant: exactly one tile is the blank.

use super::Invariant;
use crate::grid::GridModel;

/// Invariant: the grid contains exactly one blank tile.
///
/// The blank flag is assigned once at construction and swaps move whole
/// tiles, so the count can only drift through a corrupted mutation.
pub struct SingleBlankInvariant;

impl Invariant<GridModel> for SingleBlankInvariant {
    fn holds(grid: &GridModel) -> bool {
        grid.tiles().iter().filter(|tile| tile.is_blank()).count() == 1
    }

    fn description() -> &'static str {
        "Exactly one tile in the grid is the blank"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
        assert!(SingleBlankInvariant::holds(&grid));
    }

    #[test]
    fn test_doubled_blank_violates() {
        let mut grid = solved(3);
        grid.override_blank_flag(0, true);
        assert!(!SingleBlankInvariant::holds(&grid));
    }

    #[test]
    fn test_missing_blank_violates() {
        let mut grid = solved(3);
        let count = grid.tile_count();
        grid.override_blank_flag(count - 1, false);
        assert!(!SingleBlankInvariant::holds(&grid));
    }
}
