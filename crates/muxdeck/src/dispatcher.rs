//! Dispatcher for middleware action dispatch
//!
//! Actions dispatched through the Dispatcher re-enter the middleware chain
//! from the beginning (via the action channel feeding the background worker).
//! Async tasks hold a clone to report their results, e.g. a palette entry
//! run dispatching `ExecutionFinished`.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher with the action channel
    ///
    /// `action_tx` should be a clone of the channel that feeds the background
    /// worker, so dispatched actions re-enter the middleware chain.
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
