//! Blank cache invariant: the cached blank location tracks the blank tile.

use super::Invariant;
use crate::grid::GridModel;

/// Invariant: [`GridModel::blank_location`] matches the blank tile's cell.
///
/// The cache spares adjacency checks a linear scan on every click, which
/// only stays sound while every swap updates it.
pub struct BlankCacheInvariant;

impl Invariant<GridModel> for BlankCacheInvariant {
    fn holds(grid: &GridModel) -> bool {
        grid.tiles()
            .iter()
            .find(|tile| tile.is_blank())
            .is_some_and(|blank| blank.current() == grid.blank_location())
    }

    fn description() -> &'static str {
        "The cached blank location matches the blank tile's current cell"
    }
}
