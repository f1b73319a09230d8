//! Kani arbitrary implementations for grid types.
//!
//! These implementations allow Kani to explore all possible values of our types
//! during model checking.

#[cfg(kani)]
use crate::grid::GridModel;
#[cfg(kani)]
use crate::puzzle::PuzzleDefinition;
#[cfg(kani)]
use crate::shuffle::{Axis, Direction, ShuffleMove};
#[cfg(kani)]
use crate::tile::TileImage;

#[cfg(kani)]
impl kani::Arbitrary for Axis {
    fn any() -> Self {
        if kani::any() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Direction {
    fn any() -> Self {
        if kani::any() {
            Direction::Positive
        } else {
            Direction::Negative
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for ShuffleMove {
    fn any() -> Self {
        ShuffleMove::new(kani::any(), kani::any())
    }
}

#[cfg(kani)]
impl kani::Arbitrary for GridModel {
    fn any() -> Self {
        // Start solved and take a short arbitrary legal walk, so Kani
        // explores exactly the states the engine can reach
        let width = 2;
        let images = (0..width * width).map(|_| TileImage::new("")).collect();
        let puzzle = PuzzleDefinition::new(
            String::new(),
            width * width,
            100,
            images,
            TileImage::new(""),
        );
        let mut grid = GridModel::from_definition(&puzzle);

        let steps: usize = kani::any();
        kani::assume(steps <= 3);

        for _ in 0..steps {
            let step: ShuffleMove = kani::any();
            let blank = grid.blank_location();
            kani::assume(step.fits(blank, grid.width()));
            grid.swap(blank, step.destination(blank, grid.width()));
        }

        grid
    }
}
