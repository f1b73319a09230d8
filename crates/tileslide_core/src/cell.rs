//! Grid cell coordinates and adjacency.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// A cell on the puzzle grid.
///
/// `x` is the column and `y` is the row; `(0, 0)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Cell {
    x: usize,
    y: usize,
}

impl Cell {
    /// Returns the column index.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Returns the row index.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Manhattan distance to another cell.
    pub fn distance(&self, other: Cell) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// True when `other` is orthogonally adjacent, i.e. the column
    /// difference plus the row difference is exactly 1.
    pub fn is_adjacent(&self, other: Cell) -> bool {
        self.distance(other) == 1
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthogonal_neighbors_are_adjacent() {
        let center = Cell::new(1, 1);
        assert!(center.is_adjacent(Cell::new(0, 1)));
        assert!(center.is_adjacent(Cell::new(2, 1)));
        assert!(center.is_adjacent(Cell::new(1, 0)));
        assert!(center.is_adjacent(Cell::new(1, 2)));
    }

    #[test]
    fn test_diagonal_and_distant_cells_are_not_adjacent() {
        let center = Cell::new(1, 1);
        assert!(!center.is_adjacent(Cell::new(0, 0)));
        assert!(!center.is_adjacent(Cell::new(2, 2)));
        assert!(!center.is_adjacent(Cell::new(3, 1)));
        assert!(!center.is_adjacent(center));
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Cell::new(0, 3);
        let b = Cell::new(2, 1);
        assert_eq!(a.distance(b), 4);
        assert_eq!(b.distance(a), 4);
    }
}
