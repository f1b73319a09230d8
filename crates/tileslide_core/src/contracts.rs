//! Contract-based validation for tile moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::MoveRejection;
use crate::cell::Cell;
use crate::grid::GridModel;
use crate::invariants::{
    BlankCacheInvariant, GridInvariants, Invariant, InvariantSet, SingleBlankInvariant,
    UniqueOccupancyInvariant,
};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveRejection>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The clicked cell must lie inside the grid.
pub struct WithinGrid;

impl WithinGrid {
    /// Checks that the cell is inside the grid's bounds.
    #[instrument(skip(grid))]
    pub fn check(cell: &Cell, grid: &GridModel) -> Result<(), MoveRejection> {
        if cell.x() >= grid.width() || cell.y() >= grid.width() {
            Err(MoveRejection::OutsideGrid)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The clicked cell must border the blank.
pub struct AdjacentToBlank;

impl AdjacentToBlank {
    /// Checks that the cell sits directly beside the blank.
    #[instrument(skip(grid))]
    pub fn check(cell: &Cell, grid: &GridModel) -> Result<(), MoveRejection> {
        let blank = grid.blank_location();
        if cell.is_adjacent(blank) {
            Ok(())
        } else {
            Err(MoveRejection::NotAdjacent(*cell, blank))
        }
    }
}

/// Composite precondition: A move is legal if the cell is in bounds and
/// borders the blank.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(grid))]
    pub fn check(cell: &Cell, grid: &GridModel) -> Result<(), MoveRejection> {
        WithinGrid::check(cell, grid)?;
        AdjacentToBlank::check(cell, grid)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for player move actions.
///
/// Preconditions:
/// - Cell must lie inside the grid
/// - Cell must border the blank
///
/// Postconditions:
/// - Tiles still cover every cell exactly once
/// - Exactly one blank remains
/// - The blank cache still tracks the blank tile
pub struct PlayerMoveContract;

impl Contract<GridModel, Cell> for PlayerMoveContract {
    fn pre(grid: &GridModel, action: &Cell) -> Result<(), MoveRejection> {
        LegalMove::check(action, grid)
    }

    fn post(_before: &GridModel, after: &GridModel) -> Result<(), MoveRejection> {
        // Verify all invariants using the composed set
        GridInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveRejection::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Asserts that all grid invariants hold (panic on violation in debug builds).
#[instrument(skip(grid))]
pub fn assert_invariants(grid: &GridModel) {
    debug_assert!(
        UniqueOccupancyInvariant::holds(grid),
        "Unique occupancy violated"
    );
    debug_assert!(SingleBlankInvariant::holds(grid), "Single blank violated");
    debug_assert!(BlankCacheInvariant::holds(grid), "Blank cache violated");
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
    fn test_precondition_adjacent_cell() {
        let grid = solved(3);
        let beside_blank = Cell::new(1, 2);

        assert!(PlayerMoveContract::pre(&grid, &beside_blank).is_ok());
    }

    #[test]
    fn test_precondition_outside_grid() {
        let grid = solved(3);
        let outside = Cell::new(3, 0);

        assert!(matches!(
            PlayerMoveContract::pre(&grid, &outside),
            Err(MoveRejection::OutsideGrid)
        ));
    }

    #[test]
    fn test_precondition_far_from_blank() {
        let grid = solved(3);
        let far_corner = Cell::new(0, 0);

        assert!(matches!(
            PlayerMoveContract::pre(&grid, &far_corner),
            Err(MoveRejection::NotAdjacent(_, _))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_swap() {
        let before = solved(3);
        let mut after = before.clone();
        let blank = after.blank_location();
        after.swap(blank, Cell::new(1, 2));

        assert!(PlayerMoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = solved(3);
        let mut after = before.clone();

        // Corrupt the arrangement
        after.override_tile_position(0, Cell::new(1, 0));

        assert!(matches!(
            PlayerMoveContract::post(&before, &after),
            Err(MoveRejection::InvariantViolation(_))
        ));
    }
}
