//! Context Action Translation Middleware
//!
//! Translates `ViewContext` actions (Enter outside a text field) via the
//! active view's translate_context_action method.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct ContextActionMiddleware;

impl ContextActionMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for ContextActionMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::ViewContext(context) = action {
            match state
                .active_view()
                .and_then(|view| view.translate_context_action(*context, state))
            {
                Some(translated) => dispatcher.dispatch(translated),
                None => log::debug!("Context action not handled by active view: {:?}", context),
            }
            return false;
        }

        true
    }
}
