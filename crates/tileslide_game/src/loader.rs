//! Parsing and vetting of `.puz` puzzle files.
//!
//! A puzzle file is a plain-text sequence of `key: value` lines:
//!
//! ```text
//! name: Mario
//! number: 16
//! size: 100
//! thumbnail: Resources/mario/thumb.gif
//! 1: Resources/mario/tile_1.gif
//! ```
//!
//! Numbered keys assign tile images by home position, one-based. The tile
//! count must be a perfect square, every referenced image must exist on
//! disk, and every field and tile slot must be filled before a definition
//! comes back.

use derive_more::Display;
use std::path::Path;
use tileslide_core::{PuzzleDefinition, TileImage};
use tracing::{debug, instrument};

/// Why a puzzle file was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LoadFailureKind {
    /// The puzzle file itself does not exist.
    #[display("File could not be found")]
    FileNotFound,
    /// The puzzle file exists but could not be read.
    #[display("Error reading file: {}", _0)]
    Unreadable(String),
    /// A line did not follow the `key: value` shape.
    #[display("Invalid data on line: {}", _0)]
    MalformedLine(String),
    /// A tile line arrived before the `number` line.
    #[display("Missing line 'number' before line: {}", _0)]
    MissingNumber(String),
    /// A tile key fell outside `1..=number`.
    #[display("Tile index {} is outside the puzzle", _0)]
    TileIndexOutOfRange(usize),
    /// A referenced image file does not exist.
    #[display("Referenced a nonexistent image: {}", _0)]
    MissingImage(String),
    /// Required fields or tile slots were never assigned.
    #[display("File was incomplete. Missing data: {}", _0)]
    Incomplete(String),
    /// The tile count is not a perfect square.
    #[display("Invalid puzzle size: {}", _0)]
    NotSquare(usize),
}

impl std::error::Error for LoadFailureKind {}

/// A rejected puzzle file and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Failed to load '{}': {}", filename, kind)]
pub struct LoadFailure {
    /// File the loader was asked for.
    pub filename: String,
    /// What went wrong.
    pub kind: LoadFailureKind,
}

impl std::error::Error for LoadFailure {}

impl LoadFailure {
    /// Creates a new load failure.
    pub fn new(filename: impl Into<String>, kind: LoadFailureKind) -> Self {
        Self {
            filename: filename.into(),
            kind,
        }
    }
}

/// Parses and vets one puzzle file.
///
/// `puzzle_dir` is where `.puz` files live; image paths inside the file
/// resolve against `asset_base`, mirroring how the game runs from its
/// install directory.
#[instrument(skip(puzzle_dir, asset_base), fields(dir = %puzzle_dir.display()))]
pub fn load_puzzle(
    puzzle_dir: &Path,
    asset_base: &Path,
    filename: &str,
) -> Result<PuzzleDefinition, LoadFailure> {
    debug!("Loading puzzle file");
    let fail = |kind| LoadFailure::new(filename, kind);

    let path = puzzle_dir.join(filename);
    if !path.is_file() {
        return Err(fail(LoadFailureKind::FileNotFound));
    }
    let content = std::fs::read_to_string(&path)
        .map_err(|error| fail(LoadFailureKind::Unreadable(error.to_string())))?;

    let mut name = None;
    let mut tile_count = None;
    let mut tile_size = None;
    let mut thumbnail = None;
    let mut tile_images: Vec<Option<TileImage>> = Vec::new();

    for line in content.lines() {
        let Some((key, value)) = line.split_once(": ") else {
            return Err(fail(LoadFailureKind::MalformedLine(line.to_string())));
        };
        match key {
            "name" => name = Some(value.to_string()),
            "number" => {
                let count: usize = value
                    .parse()
                    .map_err(|_| fail(LoadFailureKind::MalformedLine(line.to_string())))?;
                let width = count.isqrt();
                if width * width != count {
                    return Err(fail(LoadFailureKind::NotSquare(count)));
                }
                tile_count = Some(count);
                tile_images = vec![None; count];
            }
            "size" => {
                let pixels: i32 = value
                    .parse()
                    .map_err(|_| fail(LoadFailureKind::MalformedLine(line.to_string())))?;
                tile_size = Some(pixels);
            }
            "thumbnail" => {
                if !asset_base.join(value).is_file() {
                    return Err(fail(LoadFailureKind::MissingImage(value.to_string())));
                }
                thumbnail = Some(TileImage::new(value));
            }
            _ => {
                let index: usize = key
                    .parse()
                    .map_err(|_| fail(LoadFailureKind::MalformedLine(line.to_string())))?;
                if tile_count.is_none() {
                    return Err(fail(LoadFailureKind::MissingNumber(line.to_string())));
                }
                if index == 0 || index > tile_images.len() {
                    return Err(fail(LoadFailureKind::TileIndexOutOfRange(index)));
                }
                if !asset_base.join(value).is_file() {
                    return Err(fail(LoadFailureKind::MissingImage(value.to_string())));
                }
                tile_images[index - 1] = Some(TileImage::new(value));
            }
        }
    }

    let mut missing = Vec::new();
    if name.is_none() {
        missing.push("name".to_string());
    }
    if tile_count.is_none() {
        missing.push("number".to_string());
    }
    if tile_size.is_none() {
        missing.push("size".to_string());
    }
    if thumbnail.is_none() {
        missing.push("thumbnail".to_string());
    }
    for (slot, image) in tile_images.iter().enumerate() {
        if image.is_none() {
            missing.push((slot + 1).to_string());
        }
    }

    match (name, tile_count, tile_size, thumbnail) {
        (Some(name), Some(tile_count), Some(tile_size), Some(thumbnail))
            if missing.is_empty() =>
        {
            debug!(name = %name, tiles = tile_count, "Puzzle file parsed");
            Ok(PuzzleDefinition::new(
                name,
                tile_count,
                tile_size,
                tile_images.into_iter().flatten().collect(),
                thumbnail,
            ))
        }
        _ => Err(fail(LoadFailureKind::Incomplete(missing.join(", ")))),
    }
}
