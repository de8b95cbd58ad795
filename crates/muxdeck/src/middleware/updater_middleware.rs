//! Updater Middleware
//!
//! Runs the update check on `Updater::Check` and reports the outcome in the
//! status bar.

use crate::actions::{Action, StatusBarAction, UpdaterAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::updater::{format_updater_error, UpdateChecker, UpdateStatus};
use std::sync::Arc;
use tokio::runtime::Handle;

const SOURCE: &str = "updater";

pub struct UpdaterMiddleware {
    runtime: Handle,
    /// `None` when no update endpoint is configured
    checker: Option<Arc<dyn UpdateChecker>>,
}

impl UpdaterMiddleware {
    pub fn new(runtime: Handle, checker: Option<Arc<dyn UpdateChecker>>) -> Self {
        Self { runtime, checker }
    }

    fn check(&self, dispatcher: &Dispatcher) {
        let Some(checker) = self.checker.clone() else {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                "No update endpoint configured",
                SOURCE,
            )));
            return;
        };

        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            "Checking for updates...",
            SOURCE,
        )));

        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let status = match checker.check().await {
                Ok(UpdateStatus::UpToDate { current }) => {
                    log::info!("Up to date ({})", current);
                    StatusBarAction::success(format!("muxdeck {} is up to date", current), SOURCE)
                }
                Ok(UpdateStatus::Available { latest, notes }) => {
                    log::info!("Update available: {}", latest);
                    let message = match notes {
                        Some(notes) if !notes.trim().is_empty() => {
                            format!("Update available: {} - {}", latest, notes.trim())
                        }
                        _ => format!("Update available: {}", latest),
                    };
                    StatusBarAction::info(message, SOURCE)
                }
                Err(e) => {
                    log::error!("Update check failed: {}", e);
                    StatusBarAction::error(format_updater_error(&e.to_string()), SOURCE)
                }
            };
            dispatcher.dispatch(Action::StatusBar(status));
        });
    }
}

impl Middleware for UpdaterMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Updater(UpdaterAction::Check) = action {
            self.check(dispatcher);
            return false;
        }

        true
    }
}
