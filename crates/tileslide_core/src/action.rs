//! Player input and the ways a move request can be refused.

use crate::cell::Cell;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A pointer click in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, new)]
pub struct PointerClick {
    /// Horizontal window coordinate in pixels.
    pub x: f64,
    /// Vertical window coordinate in pixels.
    pub y: f64,
}

/// Why a requested tile move did not execute.
///
/// Rejections are routine play, not faults; the session swallows them and
/// waits for the next click.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The click landed outside the tile area.
    #[display("Click landed outside the grid")]
    OutsideGrid,
    /// The clicked tile does not border the blank.
    #[display("Tile at {} is not adjacent to the blank at {}", _0, _1)]
    NotAdjacent(Cell, Cell),
    /// A structural invariant failed while vetting the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveRejection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_render_their_cells() {
        let rejection = MoveRejection::NotAdjacent(Cell::new(0, 0), Cell::new(2, 2));
        assert_eq!(
            rejection.to_string(),
            "Tile at (0, 0) is not adjacent to the blank at (2, 2)"
        );
    }
}
