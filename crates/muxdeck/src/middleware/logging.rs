use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Snapshots are large; the variant name is enough
            Action::Workspace(crate::actions::WorkspaceAction::SnapshotChanged(snapshot)) => {
                log::debug!(
                    "Action: SnapshotChanged ({} workspaces)",
                    snapshot.workspaces.len()
                );
            }
            Action::Global(GlobalAction::KeyPressed(_)) => {
                log::trace!("Action: {:?}", action);
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
