use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod command_palette_middleware;
pub mod context_action_middleware;
pub mod crash_middleware;
pub mod keyboard_middleware;
pub mod logging;
pub mod navigation_middleware;
pub mod new_workspace_middleware;
pub mod text_input_middleware;
pub mod updater_middleware;
pub mod workspace_middleware;

#[cfg(test)]
pub(crate) mod testing;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the background thread. Slow work (store mutations,
/// the update check) is spawned onto the tokio runtime and reports back
/// through the dispatcher.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
