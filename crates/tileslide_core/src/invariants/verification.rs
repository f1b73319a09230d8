//! Formal verification of invariants using Kani model checker.
//!
//! These proof harnesses mathematically verify that invariants hold
//! for ALL grids reachable by legal blank moves (bounded).

#[cfg(kani)]
mod proofs {
    use crate::{
        BlankCacheInvariant, GridInvariants, GridModel, Invariant, InvariantSet, ShuffleMove,
        SingleBlankInvariant, UniqueOccupancyInvariant,
    };

    /// Verify the full invariant set holds for reachable grids.
    ///
    /// Proves: no bounded sequence of legal blank moves can stack tiles,
    /// duplicate the blank, or desynchronize the blank cache.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_reachable_grids_keep_invariants() {
        // Arbitrary reachable state (solved grid plus a bounded legal walk)
        let grid: GridModel = kani::any();

        assert!(
            GridInvariants::check_all(&grid).is_ok(),
            "GridInvariants violated"
        );
    }

    /// Verify one more legal swap preserves the invariant set.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_swap_preserves_invariants() {
        let mut grid: GridModel = kani::any();

        let step: ShuffleMove = kani::any();
        let blank = grid.blank_location();
        kani::assume(step.fits(blank, grid.width()));

        grid.swap(blank, step.destination(blank, grid.width()));

        assert!(UniqueOccupancyInvariant::holds(&grid));
        assert!(SingleBlankInvariant::holds(&grid));
        assert!(BlankCacheInvariant::holds(&grid));
    }

    /// Verify every in-bounds shuffle move lands adjacent to the blank.
    #[kani::proof]
    fn verify_destination_is_adjacent() {
        let grid: GridModel = kani::any();

        let step: ShuffleMove = kani::any();
        let blank = grid.blank_location();
        kani::assume(step.fits(blank, grid.width()));

        let target = step.destination(blank, grid.width());
        assert!(blank.is_adjacent(target), "destination not adjacent");
    }
}
