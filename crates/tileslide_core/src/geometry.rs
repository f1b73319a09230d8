//! Pixel layout of the board and the click-to-cell mapping.

use crate::cell::Cell;
use crate::puzzle::PuzzleDefinition;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Window width in pixels.
pub const WINDOW_WIDTH: i32 = 825;
/// Window height in pixels.
pub const WINDOW_HEIGHT: i32 = 675;
/// Edge length of the square board region.
pub const BOARD_SPAN: i32 = 505;
/// Margin between the window edge and the board region.
pub const OUTER_MARGIN: i32 = 40;
/// Margin between the board region and the tile area.
pub const INNER_MARGIN: i32 = 30;

/// Derived pixel spacing for one puzzle's tile size.
///
/// The gap and border shrink as tiles grow, so a three-wide board of large
/// tiles and a five-wide board of small ones both fill the same region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BoardGeometry {
    tile_size: i32,
    gap: i32,
    border: i32,
}

impl BoardGeometry {
    /// Computes spacing for tiles of edge length `tile_size` pixels.
    pub fn for_tile_size(tile_size: i32) -> Self {
        let gap = 10 - (tile_size - 100).min(6);
        let border = 105 - (tile_size - 100).min(3);
        Self {
            tile_size,
            gap: gap.min(10),
            border: border.min(105),
        }
    }

    /// Top-left pixel of the tile occupying `cell`.
    pub fn cell_to_pixel(&self, cell: Cell) -> (i32, i32) {
        let pitch = self.tile_size + self.gap;
        (
            cell.x() as i32 * pitch + self.border,
            cell.y() as i32 * pitch + self.border,
        )
    }

    /// Maps one pixel coordinate onto a column or row index.
    ///
    /// Clicks resolve to the nearest tile center, so a hit anywhere on a
    /// tile (or in the half-gap around it) lands on that tile. The result
    /// may be negative or past the last column; callers bounds-check.
    fn pixel_to_index(&self, coord: f64) -> i64 {
        let pitch = (self.tile_size + self.gap) as f64;
        let shifted = coord - self.border as f64 + (self.tile_size / 2) as f64;
        (shifted / pitch).floor() as i64
    }
}

/// Translates pointer clicks into grid cells for one installed puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct InputMapper {
    geometry: BoardGeometry,
    width: usize,
}

impl InputMapper {
    /// Builds a mapper sized for `puzzle`.
    pub fn for_puzzle(puzzle: &PuzzleDefinition) -> Self {
        Self::new(
            BoardGeometry::for_tile_size(*puzzle.tile_size()),
            puzzle.width(),
        )
    }

    /// Returns the board spacing in use.
    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    /// Resolves a click at `(x, y)` to the cell it lands on, or `None` when
    /// the click falls outside the tile area. Misses are ordinary input,
    /// not errors.
    #[instrument(skip(self))]
    pub fn map(&self, x: f64, y: f64) -> Option<Cell> {
        let column = self.geometry.pixel_to_index(x);
        let row = self.geometry.pixel_to_index(y);
        let width = self.width as i64;
        if (0..width).contains(&column) && (0..width).contains(&row) {
            Some(Cell::new(column as usize, row as usize))
        } else {
            None
        }
    }
}

/// An axis-aligned click target centered on a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct HitRegion {
    center_x: i32,
    center_y: i32,
    width: i32,
    height: i32,
}

impl HitRegion {
    /// Whether `(x, y)` falls strictly inside the region. Points on the
    /// boundary miss.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (x - self.center_x as f64).abs() < (self.width / 2) as f64
            && (y - self.center_y as f64).abs() < (self.height / 2) as f64
    }
}

/// Fixed click targets of the game window.
///
/// The right-hand control column holds the reset, load, and quit buttons;
/// the menu overlays the board with a three-by-three thumbnail sheet plus
/// a manual-entry button in the reset slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BoardLayout {
    button_row_y: i32,
    button_span: i32,
    thumbnail_span: i32,
}

impl BoardLayout {
    /// Reset button region, present while a puzzle is in play.
    pub fn reset_button(&self) -> HitRegion {
        HitRegion::new(525, self.button_row_y, self.button_span, self.button_span)
    }

    /// Manual-entry button region, present while the menu is open. Shares
    /// the reset slot, which is vacant then.
    pub fn manual_entry_button(&self) -> HitRegion {
        self.reset_button()
    }

    /// Load button region, present in every interactive state.
    pub fn load_button(&self) -> HitRegion {
        HitRegion::new(625, self.button_row_y, self.button_span, self.button_span)
    }

    /// Quit button region, present in every interactive state.
    pub fn quit_button(&self) -> HitRegion {
        HitRegion::new(725, self.button_row_y, self.button_span, 55)
    }

    /// Region of menu thumbnail `index`, row-major across a 3x3 sheet.
    pub fn thumbnail_slot(&self, index: usize) -> HitRegion {
        let column = (index % 3) as i32;
        let row = (index / 3) as i32;
        HitRegion::new(
            120 + 150 * column,
            120 + 150 * row,
            self.thumbnail_span,
            self.thumbnail_span,
        )
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            button_row_y: 585,
            button_span: 80,
            thumbnail_span: 150,
        }
    }
}
