//! Tileslide core - sliding-tile puzzle logic with invariant checking
//!
//! This library holds everything about the game that is not a pixel:
//! the tile grid, the scramble engine, click-to-cell mapping, and the
//! click-driven session state machine.
//!
//! # Architecture
//!
//! - **Grid**: Tile arrangement with home/current tracking and a cached blank
//! - **Shuffle**: Edge-aware random walk producing solvable scrambles
//! - **Geometry**: Pixel layout, click mapping, and fixed button regions
//! - **Session**: State machine dispatching clicks to moves, menus, and quit
//! - **Contracts**: Pre/postconditions and first-class grid invariants
//!
//! # Example
//!
//! ```no_run
//! use tileslide_core::{GameSession, PointerClick, SessionSettings};
//! # use tileslide_core::{CatalogEntry, PresentationEvent, PresentationSink,
//! #     PuzzleDefinition, PuzzleSource, ScoreSink};
//! # struct Demo;
//! # impl PuzzleSource for Demo {
//! #     fn entries(&self) -> &[CatalogEntry] { &[] }
//! #     fn overflow(&self) -> bool { false }
//! #     fn puzzle(&self, _: &str) -> Option<PuzzleDefinition> { None }
//! #     fn load_file(&mut self, _: &str) -> Option<PuzzleDefinition> { None }
//! #     fn request_manual(&mut self) -> Option<PuzzleDefinition> { None }
//! # }
//! # impl ScoreSink for Demo { fn record(&mut self, _: u32, _: &str) {} }
//! # impl PresentationSink for Demo { fn notify(&mut self, _: PresentationEvent) {} }
//!
//! # fn example() -> Result<(), tileslide_core::StartupError> {
//! let mut session = GameSession::new(
//!     SessionSettings::default(),
//!     Box::new(Demo),
//!     Box::new(Demo),
//!     Box::new(Demo),
//! );
//! session.start()?;
//! session.handle_click(PointerClick::new(250.0, 250.0));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod cell;
mod contracts;
mod events;
mod geometry;
mod grid;
mod invariants;
#[cfg(kani)]
mod kani_support;
mod puzzle;
mod session;
mod shuffle;
mod sources;
mod tile;

// Crate-level exports - Grid types
pub use cell::Cell;
pub use grid::GridModel;
pub use puzzle::PuzzleDefinition;
pub use tile::{Tile, TileImage};

// Crate-level exports - Scrambling
pub use shuffle::{Axis, Direction, ShuffleEngine, ShuffleMove, DEFAULT_SWAP_COUNT};

// Crate-level exports - Geometry and input
pub use geometry::{
    BoardGeometry, BoardLayout, HitRegion, InputMapper, BOARD_SPAN, INNER_MARGIN, OUTER_MARGIN,
    WINDOW_HEIGHT, WINDOW_WIDTH,
};

// Crate-level exports - Actions and rejection reasons
pub use action::{MoveRejection, PointerClick};

// Crate-level exports - Presentation protocol
pub use events::{PresentationEvent, PresentationSink, StatusPanel};

// Crate-level exports - Collaborator seams
pub use sources::{CatalogEntry, PuzzleSource, ScoreSink};

// Crate-level exports - Contracts and invariants
pub use contracts::{
    assert_invariants, AdjacentToBlank, Contract, LegalMove, PlayerMoveContract, WithinGrid,
};
pub use invariants::{
    BlankCacheInvariant, GridInvariants, Invariant, InvariantSet, InvariantViolation,
    SingleBlankInvariant, UniqueOccupancyInvariant,
};

// Crate-level exports - Session machine
pub use session::{
    ClickOutcome, GameSession, SessionSettings, SessionState, StartupError, DEFAULT_MOVE_BUDGET,
    DEFAULT_PLAYER_NAME, DEFAULT_PUZZLE_FILE, MOVE_BUDGET_RANGE, QUIT_DELAY,
};
