//! One-way notifications from the session to whatever renders it.
//!
//! The session never draws. It narrates state changes through
//! [`PresentationSink::notify`] and a front end translates them into
//! pixels, sounds, or log lines.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The banner a finished or quitting game shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum StatusPanel {
    /// The puzzle reached its home arrangement.
    Victory,
    /// The move budget ran out first.
    Defeat,
    /// The player asked to leave.
    Quitting,
}

/// A state change worth rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresentationEvent {
    /// A tile slid from `from` into the blank at `to`.
    TileMoved {
        /// Cell the tile left.
        from: Cell,
        /// Cell the tile now occupies.
        to: Cell,
    },
    /// The move counter changed; `warning` marks a nearly spent budget.
    CounterChanged {
        /// Player moves taken so far.
        moves: u32,
        /// Moves allowed in total.
        budget: u32,
        /// Whether the remaining allowance is close to zero.
        warning: bool,
    },
    /// The move counter left the screen.
    CounterCleared,
    /// The load menu opened; `overflow` means the catalog had more
    /// puzzles than the menu shows.
    MenuShown {
        /// Whether entries past capacity were left off the sheet.
        overflow: bool,
    },
    /// The load menu closed.
    MenuHidden,
    /// A status banner went up.
    StatusShown(StatusPanel),
    /// The status banner came down.
    StatusCleared,
    /// A requested puzzle failed to load; play continues unchanged.
    LoadRejected,
    /// The session is shutting down; the front end should exit after
    /// `delay`.
    Terminating {
        /// Grace period before the window closes.
        delay: Duration,
    },
}

/// Receives presentation events in the order the session emits them.
pub trait PresentationSink {
    /// Handles one event. Implementations must not call back into the
    /// session.
    fn notify(&mut self, event: PresentationEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_panels_render_by_name() {
        assert_eq!(StatusPanel::Victory.to_string(), "Victory");
        assert_eq!(StatusPanel::Quitting.to_string(), "Quitting");
    }
}
