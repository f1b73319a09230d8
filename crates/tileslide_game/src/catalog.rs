//! Puzzle discovery for the load menu.
//!
//! Scans a directory for `.puz` files, keeps the valid ones, and serves
//! them to the session: thumbnails for the menu sheet, full definitions on
//! selection, and manual loads by filename.

use crate::loader::load_puzzle;
use derive_more::Display;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tileslide_core::{CatalogEntry, PuzzleDefinition, PuzzleSource};
use tracing::{debug, info, instrument, warn};

/// Thumbnails the menu sheet can hold.
pub const MENU_CAPACITY: usize = 9;

/// Failure to scan the puzzle directory.
#[derive(Debug, Clone, Display)]
#[display("Catalog error: {} at {}:{}", message, file, line)]
pub struct CatalogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl std::error::Error for CatalogError {}

impl CatalogError {
    /// Creates a new catalog error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// A scanned collection of playable puzzles.
///
/// Invalid files are skipped at scan time, so everything in here is known
/// to load. An empty catalog is not an error; the menu just has nothing to
/// offer.
#[derive(Debug, Clone)]
pub struct PuzzleCatalog {
    /// Directory the catalog was scanned from.
    puzzle_dir: PathBuf,
    /// Directory image paths resolve against.
    asset_base: PathBuf,
    /// Every playable puzzle, keyed by file name.
    loaded: Vec<(String, PuzzleDefinition)>,
    /// Menu entries for the first [`MENU_CAPACITY`] puzzles.
    entries: Vec<CatalogEntry>,
    /// Whether the scan found more puzzles than the menu can show.
    overflow: bool,
    /// Filenames queued to answer manual-entry requests.
    manual_requests: VecDeque<String>,
}

impl PuzzleCatalog {
    /// Scans `puzzle_dir` for `.puz` files and loads each through the
    /// puzzle loader.
    ///
    /// Files that fail to load are skipped with a warning; only an
    /// unreadable directory is an error.
    #[instrument(skip(puzzle_dir, asset_base))]
    pub fn scan(
        puzzle_dir: impl AsRef<Path>,
        asset_base: impl AsRef<Path>,
    ) -> Result<Self, CatalogError> {
        let dir = puzzle_dir.as_ref();
        let assets = asset_base.as_ref();
        info!(path = %dir.display(), "Scanning directory for puzzle files");

        if !dir.exists() {
            return Err(CatalogError::new(format!(
                "Puzzle directory not found: {}",
                dir.display()
            )));
        }

        if !dir.is_dir() {
            return Err(CatalogError::new(format!(
                "Path is not a directory: {}",
                dir.display()
            )));
        }

        let dir_entries = std::fs::read_dir(dir).map_err(|e| {
            CatalogError::new(format!("Failed to read directory {}: {}", dir.display(), e))
        })?;

        let mut loaded = Vec::new();
        for entry_result in dir_entries {
            let entry = entry_result
                .map_err(|e| CatalogError::new(format!("Failed to read directory entry: {}", e)))?;
            let entry_path = entry.path();

            if !entry_path.is_file() {
                debug!(path = %entry_path.display(), "Skipping non-file entry");
                continue;
            }
            if entry_path.extension().and_then(|ext| ext.to_str()) != Some("puz") {
                debug!(path = %entry_path.display(), "Skipping non-puzzle file");
                continue;
            }
            let Some(filename) = entry_path
                .file_name()
                .and_then(|name| name.to_str())
                .map(String::from)
            else {
                debug!(path = %entry_path.display(), "Skipping undecodable file name");
                continue;
            };

            match load_puzzle(dir, assets, &filename) {
                Ok(puzzle) => {
                    info!(name = %puzzle.name(), path = %entry_path.display(), "Loaded puzzle");
                    loaded.push((filename, puzzle));
                }
                Err(failure) => {
                    warn!(path = %entry_path.display(), error = %failure, "Skipping invalid puzzle file");
                }
            }
        }

        // Sort by filename for stable ordering across platforms.
        loaded.sort_by(|a, b| a.0.cmp(&b.0));

        let overflow = loaded.len() > MENU_CAPACITY;
        if overflow {
            warn!(
                found = loaded.len(),
                shown = MENU_CAPACITY,
                "More puzzle files than the menu can show"
            );
        }
        let entries = loaded
            .iter()
            .take(MENU_CAPACITY)
            .map(|(file, puzzle)| CatalogEntry::new(file.clone(), puzzle.thumbnail().clone()))
            .collect();

        info!(count = loaded.len(), "Puzzle catalog loaded");
        Ok(Self {
            puzzle_dir: dir.to_path_buf(),
            asset_base: assets.to_path_buf(),
            loaded,
            entries,
            overflow,
            manual_requests: VecDeque::new(),
        })
    }

    /// Queues a filename to answer the next manual-entry request.
    #[instrument(skip(self, filename))]
    pub fn queue_manual(&mut self, filename: impl Into<String>) {
        let filename = filename.into();
        debug!(name = %filename, "Queued manual load request");
        self.manual_requests.push_back(filename);
    }

    /// All loaded puzzles with their file names, sorted by file name.
    pub fn puzzles(&self) -> &[(String, PuzzleDefinition)] {
        &self.loaded
    }

    /// Returns the number of loaded puzzles.
    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    /// Returns `true` if no puzzles were found.
    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}

impl PuzzleSource for PuzzleCatalog {
    fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    fn overflow(&self) -> bool {
        self.overflow
    }

    #[instrument(skip(self))]
    fn puzzle(&self, id: &str) -> Option<PuzzleDefinition> {
        self.loaded
            .iter()
            .find(|(file, _)| file.as_str() == id)
            .map(|(_, puzzle)| puzzle.clone())
    }

    #[instrument(skip(self))]
    fn load_file(&mut self, name: &str) -> Option<PuzzleDefinition> {
        match load_puzzle(&self.puzzle_dir, &self.asset_base, name) {
            Ok(puzzle) => Some(puzzle),
            Err(failure) => {
                warn!(error = %failure, "Puzzle load failed");
                None
            }
        }
    }

    #[instrument(skip(self))]
    fn request_manual(&mut self) -> Option<PuzzleDefinition> {
        let name = self.manual_requests.pop_front()?;
        debug!(name = %name, "Answering manual load request");
        self.load_file(&name)
    }
}
