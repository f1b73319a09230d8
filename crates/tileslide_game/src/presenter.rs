//! Log-backed rendering of session events.

use tileslide_core::{PresentationEvent, PresentationSink};
use tracing::{debug, info, instrument, warn};

/// Renders presentation events as structured log lines.
///
/// Stands in for a graphics front end: every surface change the session
/// narrates shows up in the log, which is enough to follow a scripted game
/// or reconstruct a misbehaving one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPresenter;

impl PresentationSink for LogPresenter {
    #[instrument(skip(self, event))]
    fn notify(&mut self, event: PresentationEvent) {
        match event {
            PresentationEvent::TileMoved { from, to } => {
                info!(%from, %to, "Tile slid");
            }
            PresentationEvent::CounterChanged {
                moves,
                budget,
                warning,
            } => {
                if warning {
                    warn!(moves, budget, "Running low on moves");
                } else {
                    info!(moves, budget, "Move counter updated");
                }
            }
            PresentationEvent::CounterCleared => debug!("Move counter cleared"),
            PresentationEvent::MenuShown { overflow } => {
                info!(overflow, "Load menu opened");
            }
            PresentationEvent::MenuHidden => debug!("Load menu closed"),
            PresentationEvent::StatusShown(panel) => info!(%panel, "Status panel raised"),
            PresentationEvent::StatusCleared => debug!("Status panel lowered"),
            PresentationEvent::LoadRejected => warn!("Requested puzzle failed to load"),
            PresentationEvent::Terminating { delay } => {
                info!(?delay, "Session terminating");
            }
        }
    }
}
