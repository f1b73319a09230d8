//! Solvable scrambles via an edge-aware random walk of the blank.

use crate::cell::Cell;
use crate::grid::GridModel;
use derive_new::new;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Default number of blank moves in a scramble.
pub const DEFAULT_SWAP_COUNT: usize = 100;

/// Movement axis of a shuffle step.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Axis {
    /// The blank's column changes.
    Horizontal,
    /// The blank's row changes.
    Vertical,
}

/// Direction of travel along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Direction {
    /// Toward higher indices: right, or down.
    Positive,
    /// Toward lower indices: left, or up.
    Negative,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Positive => Direction::Negative,
            Direction::Negative => Direction::Positive,
        }
    }

    fn offset(self) -> isize {
        match self {
            Direction::Positive => 1,
            Direction::Negative => -1,
        }
    }
}

/// One executed blank move, recorded while scrambling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ShuffleMove {
    axis: Axis,
    direction: Direction,
}

impl ShuffleMove {
    /// Returns the movement axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns the travel direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The move that undoes this one.
    pub fn inverse(self) -> Self {
        Self {
            axis: self.axis,
            direction: self.direction.reversed(),
        }
    }

    /// Whether executing this move from `blank` stays inside a grid of
    /// edge length `width`.
    pub fn fits(self, blank: Cell, width: usize) -> bool {
        let (x, y) = self.shifted(blank);
        x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < width
    }

    /// Cell the blank lands on when this move executes from `blank`.
    ///
    /// # Panics
    ///
    /// Panics when the move would leave a grid of edge length `width`; the
    /// engine only records in-bounds moves, so replaying a recorded
    /// sequence from its starting arrangement never trips this.
    pub fn destination(self, blank: Cell, width: usize) -> Cell {
        assert!(
            self.fits(blank, width),
            "move {self:?} leaves the grid from {blank}"
        );
        let (x, y) = self.shifted(blank);
        Cell::new(x as usize, y as usize)
    }

    fn shifted(self, blank: Cell) -> (isize, isize) {
        let (dx, dy) = match self.axis {
            Axis::Horizontal => (self.direction.offset(), 0),
            Axis::Vertical => (0, self.direction.offset()),
        };
        (blank.x() as isize + dx, blank.y() as isize + dy)
    }
}

impl std::fmt::Display for ShuffleMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.axis, self.direction)
    }
}

/// Scrambles a grid through a sequence of legal blank moves.
///
/// Every arrangement the engine produces is reachable from solved by
/// construction, so the result is always solvable: in the worst case the
/// recorded sequence can be undone move by move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ShuffleEngine {
    swap_count: usize,
}

impl ShuffleEngine {
    /// Number of blank moves per scramble.
    pub fn swap_count(&self) -> usize {
        self.swap_count
    }

    /// Scrambles `grid` in place and returns the executed move sequence.
    ///
    /// Each step picks an axis 50/50, then a direction by priority: away
    /// from a minimum edge, away from a maximum edge, continue the previous
    /// same-axis move, otherwise uniformly at random. The walk never
    /// immediately undoes a same-axis move, which keeps it spreading instead
    /// of oscillating. Scramble swaps are invisible to move counting.
    ///
    /// Grids narrower than two cells have no legal moves and come back
    /// untouched.
    #[instrument(skip(self, grid, rng), fields(swaps = self.swap_count, width = grid.width()))]
    pub fn scramble<R: Rng>(&self, grid: &mut GridModel, rng: &mut R) -> Vec<ShuffleMove> {
        if grid.width() < 2 {
            warn!("grid too small to scramble");
            return Vec::new();
        }
        let max = grid.width() - 1;
        let mut last: Option<ShuffleMove> = None;
        let mut moves = Vec::with_capacity(self.swap_count);
        for _ in 0..self.swap_count {
            let blank = grid.blank_location();
            let axis = if rng.gen_bool(0.5) {
                Axis::Vertical
            } else {
                Axis::Horizontal
            };
            let position = match axis {
                Axis::Horizontal => blank.x(),
                Axis::Vertical => blank.y(),
            };
            let direction = if position == 0 {
                Direction::Positive
            } else if position == max {
                Direction::Negative
            } else if let Some(previous) = last.filter(|mv| mv.axis() == axis) {
                previous.direction()
            } else if rng.gen_bool(0.5) {
                Direction::Positive
            } else {
                Direction::Negative
            };
            let step = ShuffleMove::new(axis, direction);
            grid.swap(blank, step.destination(blank, grid.width()));
            last = Some(step);
            moves.push(step);
        }
        debug!(executed = moves.len(), "scramble complete");
        moves
    }

    /// Replays a recorded move sequence against a grid, one blank move at a
    /// time. Used to undo a scramble (via [`ShuffleMove::inverse`]) or to
    /// drive scramble animation.
    pub fn replay(grid: &mut GridModel, moves: &[ShuffleMove]) {
        for step in moves {
            let blank = grid.blank_location();
            grid.swap(blank, step.destination(blank, grid.width()));
        }
    }
}

impl Default for ShuffleEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SWAP_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::PuzzleDefinition;
    use crate::tile::TileImage;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid(width: usize) -> GridModel {
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
    fn test_scramble_executes_requested_swap_count() {
        let mut board = grid(4);
        let mut rng = StdRng::seed_from_u64(7);
        let moves = ShuffleEngine::new(250).scramble(&mut board, &mut rng);
        assert_eq!(moves.len(), 250);
    }

    #[test]
    fn test_scramble_is_deterministic_for_a_seed() {
        let mut first = grid(4);
        let mut second = grid(4);
        let engine = ShuffleEngine::default();

        let moves_a = engine.scramble(&mut first, &mut StdRng::seed_from_u64(99));
        let moves_b = engine.scramble(&mut second, &mut StdRng::seed_from_u64(99));

        assert_eq!(moves_a, moves_b);
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_cell_grid_comes_back_untouched() {
        let mut board = grid(1);
        let mut rng = StdRng::seed_from_u64(3);
        let moves = ShuffleEngine::default().scramble(&mut board, &mut rng);
        assert!(moves.is_empty());
        assert!(board.is_solved());
    }

    #[test]
    fn test_inverse_move_round_trips() {
        let step = ShuffleMove::new(Axis::Horizontal, Direction::Positive);
        assert_eq!(step.inverse().inverse(), step);
        assert_eq!(step.inverse().direction(), Direction::Negative);
    }
}
