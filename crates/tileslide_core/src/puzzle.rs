//! Validated puzzle data consumed by the engine.

use crate::tile::TileImage;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A loaded puzzle: display name, grid parameters, and image references.
///
/// Instances come from an external loader that has already validated the
/// data (perfect-square tile count, resolvable images); the engine does not
/// re-validate. The image list is ordered by home cell, row-major, with the
/// final image belonging to the blank.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    /// Display name.
    name: String,
    /// Total number of tiles including the blank; a perfect square.
    tile_count: usize,
    /// Tile edge length in pixels.
    tile_size: i32,
    /// One image per tile, ordered by home cell in row-major order.
    tile_images: Vec<TileImage>,
    /// Menu thumbnail.
    thumbnail: TileImage,
}

impl PuzzleDefinition {
    /// Grid edge length in cells, `sqrt(tile_count)`.
    pub fn width(&self) -> usize {
        self.tile_count.isqrt()
    }
}
