//! Click-driven state machine for one sitting of the puzzle game.
//!
//! The session owns the grid, the scramble engine, and the move counter,
//! and narrates everything worth drawing through a [`PresentationSink`].
//! Puzzle storage and score persistence stay behind their traits, so the
//! machine runs the same under a window, a test harness, or a log-only
//! front end.

use crate::action::{MoveRejection, PointerClick};
use crate::cell::Cell;
use crate::contracts::{assert_invariants, Contract, PlayerMoveContract};
use crate::events::{PresentationEvent, PresentationSink, StatusPanel};
use crate::geometry::{BoardLayout, InputMapper};
use crate::grid::GridModel;
use crate::puzzle::PuzzleDefinition;
use crate::shuffle::{ShuffleEngine, DEFAULT_SWAP_COUNT};
use crate::sources::{PuzzleSource, ScoreSink};
use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Grace period between the quit click and window shutdown.
pub const QUIT_DELAY: Duration = Duration::from_millis(2000);

/// Budgets outside this range are clamped to its nearest end.
pub const MOVE_BUDGET_RANGE: RangeInclusive<u32> = 5..=200;

/// Move budget used when none is configured.
pub const DEFAULT_MOVE_BUDGET: u32 = 50;

/// Player name used when none is configured.
pub const DEFAULT_PLAYER_NAME: &str = "1UP";

/// Puzzle file installed at startup when none is configured.
pub const DEFAULT_PUZZLE_FILE: &str = "mario.puz";

/// The counter shows its warning once this few moves remain.
const BUDGET_WARNING_MARGIN: u32 = 10;

/// Where the session is in its lifecycle.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
pub enum SessionState {
    /// Not started; every click is ignored.
    #[default]
    Idle,
    /// The load menu covers the board.
    Menu,
    /// A puzzle is in play.
    Playing,
    /// The game ended; only the global buttons respond.
    Over,
}

/// Per-sitting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Name recorded against winning scores.
    player_name: String,
    /// Moves allowed before the game is lost.
    move_budget: u32,
    /// Blank moves per scramble.
    shuffle_swaps: usize,
    /// Puzzle file installed at startup.
    default_puzzle: String,
}

impl SessionSettings {
    /// Creates settings, clamping the move budget into [`MOVE_BUDGET_RANGE`].
    #[instrument(skip(player_name, default_puzzle), fields(player = %player_name))]
    pub fn new(
        player_name: String,
        move_budget: u32,
        shuffle_swaps: usize,
        default_puzzle: String,
    ) -> Self {
        let clamped = move_budget.clamp(*MOVE_BUDGET_RANGE.start(), *MOVE_BUDGET_RANGE.end());
        if clamped != move_budget {
            warn!(requested = move_budget, clamped, "Move budget out of range");
        }
        Self {
            player_name,
            move_budget: clamped,
            shuffle_swaps,
            default_puzzle,
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::new(
            DEFAULT_PLAYER_NAME.to_string(),
            DEFAULT_MOVE_BUDGET,
            DEFAULT_SWAP_COUNT,
            DEFAULT_PUZZLE_FILE.to_string(),
        )
    }
}

/// What the session did with a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click arrived while the session could not act on it.
    Ignored,
    /// The click was processed; rejected moves and misses land here too.
    Handled,
    /// The player quit; the front end should close once `delay` passes.
    Quit {
        /// Grace period before shutdown.
        delay: Duration,
    },
}

/// Failure to bring up the session's first puzzle.
#[derive(Debug, Clone, Display, Error)]
#[display("Startup error: {} at {}:{}", message, file, line)]
pub struct StartupError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StartupError {
    /// Creates a new startup error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// One sitting of the puzzle game.
pub struct GameSession {
    state: SessionState,
    settings: SessionSettings,
    layout: BoardLayout,
    shuffler: ShuffleEngine,
    grid: Option<GridModel>,
    mapper: Option<InputMapper>,
    moves: u32,
    dispatching: bool,
    rng: StdRng,
    puzzles: Box<dyn PuzzleSource>,
    scores: Box<dyn ScoreSink>,
    presenter: Box<dyn PresentationSink>,
}

impl GameSession {
    /// Creates an idle session around its collaborators.
    #[instrument(skip(settings, puzzles, scores, presenter), fields(player = %settings.player_name()))]
    pub fn new(
        settings: SessionSettings,
        puzzles: Box<dyn PuzzleSource>,
        scores: Box<dyn ScoreSink>,
        presenter: Box<dyn PresentationSink>,
    ) -> Self {
        let shuffler = ShuffleEngine::new(*settings.shuffle_swaps());
        Self {
            state: SessionState::default(),
            settings,
            layout: BoardLayout::default(),
            shuffler,
            grid: None,
            mapper: None,
            moves: 0,
            dispatching: false,
            rng: StdRng::from_entropy(),
            puzzles,
            scores,
            presenter,
        }
    }

    /// Replaces the scramble randomness with a seeded source, so a run can
    /// be reproduced.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Loads and installs the configured startup puzzle.
    #[instrument(skip(self), fields(puzzle = %self.settings.default_puzzle()))]
    pub fn start(&mut self) -> Result<(), StartupError> {
        let name = self.settings.default_puzzle().clone();
        let Some(puzzle) = self.puzzles.load_file(&name) else {
            return Err(StartupError::new(format!(
                "startup puzzle {name} failed to load"
            )));
        };
        self.install(&puzzle);
        Ok(())
    }

    /// Routes one pointer click through the session.
    ///
    /// Clicks that arrive while an earlier click is still resolving are
    /// dropped, so a double click can never move two tiles at once.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn handle_click(&mut self, click: PointerClick) -> ClickOutcome {
        if self.dispatching {
            debug!("Click arrived mid-dispatch, dropping");
            return ClickOutcome::Ignored;
        }
        self.dispatching = true;
        let outcome = self.dispatch(click);
        self.dispatching = false;
        outcome
    }

    /// Snaps the board home and deals a fresh scramble.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        let Some(grid) = self.grid.as_mut() else {
            return;
        };
        grid.reset_to_home();
        self.shuffler.scramble(grid, &mut self.rng);
        self.moves = 0;
        self.notify_counter();
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Player moves taken on the current board.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// The configuration this session runs under.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// The board in play, if a puzzle is installed.
    pub fn grid(&self) -> Option<&GridModel> {
        self.grid.as_ref()
    }

    /// The click-to-cell mapper for the installed puzzle.
    pub fn mapper(&self) -> Option<InputMapper> {
        self.mapper
    }

    /// The window's fixed click targets.
    pub fn layout(&self) -> BoardLayout {
        self.layout
    }

    fn dispatch(&mut self, click: PointerClick) -> ClickOutcome {
        if self.state == SessionState::Idle {
            return ClickOutcome::Ignored;
        }
        if self.layout.quit_button().contains(click.x, click.y) {
            return self.quit();
        }
        if self.layout.load_button().contains(click.x, click.y) {
            self.open_menu();
            return ClickOutcome::Handled;
        }
        match self.state {
            SessionState::Idle => ClickOutcome::Ignored,
            SessionState::Menu => self.menu_click(click),
            SessionState::Playing => self.play_click(click),
            SessionState::Over => ClickOutcome::Handled,
        }
    }

    fn quit(&mut self) -> ClickOutcome {
        info!("Player quit");
        self.state = SessionState::Over;
        self.presenter
            .notify(PresentationEvent::StatusShown(StatusPanel::Quitting));
        self.presenter
            .notify(PresentationEvent::Terminating { delay: QUIT_DELAY });
        ClickOutcome::Quit { delay: QUIT_DELAY }
    }

    fn open_menu(&mut self) {
        debug!("Opening load menu");
        if let Some(grid) = self.grid.as_mut() {
            grid.reset_to_home();
        }
        self.state = SessionState::Menu;
        self.presenter.notify(PresentationEvent::StatusCleared);
        self.presenter.notify(PresentationEvent::CounterCleared);
        self.presenter.notify(PresentationEvent::MenuShown {
            overflow: self.puzzles.overflow(),
        });
    }

    fn menu_click(&mut self, click: PointerClick) -> ClickOutcome {
        if self
            .layout
            .manual_entry_button()
            .contains(click.x, click.y)
        {
            match self.puzzles.request_manual() {
                Some(puzzle) => {
                    self.presenter.notify(PresentationEvent::MenuHidden);
                    self.install(&puzzle);
                }
                None => {
                    warn!("Manual puzzle entry failed");
                    self.presenter.notify(PresentationEvent::LoadRejected);
                }
            }
            return ClickOutcome::Handled;
        }
        let selected = self
            .puzzles
            .entries()
            .iter()
            .enumerate()
            .find(|(index, _)| self.layout.thumbnail_slot(*index).contains(click.x, click.y))
            .map(|(_, entry)| entry.id().clone());
        if let Some(id) = selected {
            match self.puzzles.puzzle(&id) {
                Some(puzzle) => {
                    self.presenter.notify(PresentationEvent::MenuHidden);
                    self.install(&puzzle);
                }
                None => {
                    warn!(id = %id, "Menu entry failed to load");
                    self.presenter.notify(PresentationEvent::LoadRejected);
                }
            }
        }
        ClickOutcome::Handled
    }

    fn play_click(&mut self, click: PointerClick) -> ClickOutcome {
        if self.layout.reset_button().contains(click.x, click.y) {
            self.reset_board();
            return ClickOutcome::Handled;
        }
        let Some(mapper) = self.mapper else {
            return ClickOutcome::Handled;
        };
        let Some(cell) = mapper.map(click.x, click.y) else {
            debug!("Click missed the grid");
            return ClickOutcome::Handled;
        };
        let Some(grid) = self.grid.as_mut() else {
            return ClickOutcome::Handled;
        };
        let vacated = match Self::execute_move(grid, cell) {
            Ok(vacated) => vacated,
            Err(rejection) => {
                debug!(%rejection, "Move rejected");
                return ClickOutcome::Handled;
            }
        };
        self.moves += 1;
        let solved = grid.is_solved();
        self.presenter.notify(PresentationEvent::TileMoved {
            from: cell,
            to: vacated,
        });
        self.notify_counter();
        if solved {
            info!(moves = self.moves, "Puzzle solved");
            self.presenter
                .notify(PresentationEvent::StatusShown(StatusPanel::Victory));
            self.scores.record(self.moves, self.settings.player_name());
            self.state = SessionState::Over;
        } else if self.moves >= *self.settings.move_budget() {
            info!(moves = self.moves, "Move budget spent");
            self.presenter
                .notify(PresentationEvent::StatusShown(StatusPanel::Defeat));
            self.state = SessionState::Over;
        }
        ClickOutcome::Handled
    }

    /// Slides the tile at `cell` into the blank, returning the cell it
    /// vacated.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (in bounds, adjacent to blank)
    /// - Postconditions checked in debug builds only
    fn execute_move(grid: &mut GridModel, cell: Cell) -> Result<Cell, MoveRejection> {
        PlayerMoveContract::pre(grid, &cell)?;

        #[cfg(debug_assertions)]
        let before = grid.clone();

        let blank = grid.blank_location();
        grid.swap(blank, cell);

        #[cfg(debug_assertions)]
        PlayerMoveContract::post(&before, grid)?;

        assert_invariants(grid);

        Ok(blank)
    }

    #[instrument(skip(self, puzzle), fields(name = %puzzle.name()))]
    fn install(&mut self, puzzle: &PuzzleDefinition) {
        info!("Installing puzzle");
        let mut grid = GridModel::from_definition(puzzle);
        self.shuffler.scramble(&mut grid, &mut self.rng);
        self.mapper = Some(InputMapper::for_puzzle(puzzle));
        self.grid = Some(grid);
        self.moves = 0;
        self.state = SessionState::Playing;
        self.notify_counter();
    }

    fn notify_counter(&mut self) {
        let budget = *self.settings.move_budget();
        let warning = self.moves + BUDGET_WARNING_MARGIN >= budget;
        self.presenter.notify(PresentationEvent::CounterChanged {
            moves: self.moves,
            budget,
            warning,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::CatalogEntry;
    use crate::tile::TileImage;

    struct FixedSource {
        entries: Vec<CatalogEntry>,
    }

    impl FixedSource {
        fn new() -> Self {
            Self {
                entries: Vec::new(),
            }
        }

        fn puzzle() -> PuzzleDefinition {
            let images = (0..4)
                .map(|i| TileImage::new(format!("tile{i}.gif")))
                .collect();
            PuzzleDefinition::new("two".to_string(), 4, 100, images, TileImage::new("thumb.gif"))
        }
    }

    impl PuzzleSource for FixedSource {
        fn entries(&self) -> &[CatalogEntry] {
            &self.entries
        }

        fn overflow(&self) -> bool {
            false
        }

        fn puzzle(&self, _id: &str) -> Option<PuzzleDefinition> {
            Some(Self::puzzle())
        }

        fn load_file(&mut self, _name: &str) -> Option<PuzzleDefinition> {
            Some(Self::puzzle())
        }

        fn request_manual(&mut self) -> Option<PuzzleDefinition> {
            None
        }
    }

    struct NullScores;

    impl ScoreSink for NullScores {
        fn record(&mut self, _moves: u32, _player: &str) {}
    }

    struct NullPresenter;

    impl PresentationSink for NullPresenter {
        fn notify(&mut self, _event: PresentationEvent) {}
    }

    fn session() -> GameSession {
        GameSession::new(
            SessionSettings::default(),
            Box::new(FixedSource::new()),
            Box::new(NullScores),
            Box::new(NullPresenter),
        )
        .with_seed(11)
    }

    #[test]
    fn test_settings_clamp_budget_into_range() {
        let low = SessionSettings::new("p".to_string(), 1, 10, "a.puz".to_string());
        let high = SessionSettings::new("p".to_string(), 999, 10, "a.puz".to_string());
        assert_eq!(*low.move_budget(), 5);
        assert_eq!(*high.move_budget(), 200);
    }

    #[test]
    fn test_default_settings() {
        let settings = SessionSettings::default();
        assert_eq!(settings.player_name(), "1UP");
        assert_eq!(*settings.move_budget(), 50);
        assert_eq!(*settings.shuffle_swaps(), DEFAULT_SWAP_COUNT);
        assert_eq!(settings.default_puzzle(), "mario.puz");
    }

    #[test]
    fn test_idle_session_ignores_clicks() {
        let mut session = session();
        let outcome = session.handle_click(PointerClick::new(200.0, 200.0));
        assert_eq!(outcome, ClickOutcome::Ignored);
    }

    #[test]
    fn test_click_during_dispatch_is_dropped() {
        let mut session = session();
        session.start().unwrap();
        session.dispatching = true;
        let outcome = session.handle_click(PointerClick::new(200.0, 200.0));
        assert_eq!(outcome, ClickOutcome::Ignored);
    }

    #[test]
    fn test_start_installs_and_begins_play() {
        let mut session = session();
        session.start().unwrap();
        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.moves(), 0);
        assert!(session.grid().is_some());
    }

    #[test]
    fn test_quit_button_schedules_shutdown() {
        let mut session = session();
        session.start().unwrap();
        let outcome = session.handle_click(PointerClick::new(725.0, 585.0));
        assert_eq!(outcome, ClickOutcome::Quit { delay: QUIT_DELAY });
        assert_eq!(session.state(), SessionState::Over);
    }

    #[test]
    fn test_load_button_opens_menu() {
        let mut session = session();
        session.start().unwrap();
        let outcome = session.handle_click(PointerClick::new(625.0, 585.0));
        assert_eq!(outcome, ClickOutcome::Handled);
        assert_eq!(session.state(), SessionState::Menu);
    }
}
