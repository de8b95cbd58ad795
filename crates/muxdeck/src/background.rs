//! Background worker thread that processes actions through middleware
//!
//! - Main thread handles rendering and user input only
//! - Background thread runs the middleware chain; store calls are spawned
//!   onto the tokio runtime from there
//! - Communication happens via channels

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::thread;

/// Shared state that background can read (main thread writes via reducer)
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the background worker thread
///
/// - `action_rx`: receives actions from main thread and from Dispatcher (re-entry)
/// - `action_tx`: used to create the Dispatcher for middleware
/// - `result_tx`: sends non-consumed actions to the main thread for reducers
/// - `state`: shared state for middleware to read
/// - `middleware`: the middleware chain, in execution order
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);

    while let Ok(action) = action_rx.recv() {
        if matches!(action, Action::Global(GlobalAction::Quit)) {
            log::info!("Background worker received shutdown signal");
            if result_tx.send(action).is_err() {
                log::error!("Failed to send quit action to main thread");
            }
            break;
        }

        let current_state = match state.read() {
            Ok(s) => s.clone(),
            Err(e) => {
                log::error!("Failed to read shared state: {}", e);
                continue;
            }
        };

        let should_forward = run_chain(&mut middleware, &action, &current_state, &dispatcher);

        if should_forward && result_tx.send(action).is_err() {
            log::error!("Result channel disconnected, shutting down");
            break;
        }
    }

    log::info!("Background worker stopped");
}

/// Run `action` through the chain; `true` when no middleware consumed it
pub fn run_chain(
    middleware: &mut [Box<dyn Middleware>],
    action: &Action,
    state: &AppState,
    dispatcher: &Dispatcher,
) -> bool {
    for mw in middleware.iter_mut() {
        if !mw.handle(action, state, dispatcher) {
            return false;
        }
    }
    true
}
