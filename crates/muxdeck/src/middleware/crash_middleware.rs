//! Crash Middleware
//!
//! Performs the local-data reset requested from the crash screen. Only one
//! reset runs at a time; the flag lives here because the shared state may
//! not show the reducer's `resetting` mark yet.

use crate::actions::{Action, CrashAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::workspace::WorkspaceStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;

pub struct CrashMiddleware {
    runtime: Handle,
    store: Arc<dyn WorkspaceStore>,
    resetting: Arc<AtomicBool>,
}

impl CrashMiddleware {
    pub fn new(runtime: Handle, store: Arc<dyn WorkspaceStore>) -> Self {
        Self {
            runtime,
            store,
            resetting: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Middleware for CrashMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if !matches!(action, Action::Crash(CrashAction::ResetRequested)) {
            return true;
        }
        if state.crash.as_ref().is_some_and(|crash| crash.resetting)
            || self.resetting.swap(true, Ordering::SeqCst)
        {
            log::debug!("Reset already running, ignoring request");
            return false;
        }

        log::warn!("Resetting local workspace data");
        let store = Arc::clone(&self.store);
        let resetting = Arc::clone(&self.resetting);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let result = store.reset_local_data().await;
            resetting.store(false, Ordering::SeqCst);
            match result {
                Ok(()) => {
                    dispatcher.dispatch(Action::Crash(CrashAction::ResetSucceeded));
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                        "Local data reset",
                        "crash",
                    )));
                }
                Err(e) => {
                    log::error!("Local data reset failed: {:#}", e);
                    dispatcher.dispatch(Action::Crash(CrashAction::ResetFailed(format!("{:#}", e))));
                }
            }
        });

        // The reducer marks the crash screen as resetting
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::testing;
    use crate::state::CrashState;
    use crate::workspace::testing::{RecordingStore, StoreCall};
    use crate::workspace::WorkspaceSnapshot;
    use tokio::runtime::Runtime;
    use tokio::sync::Notify;

    fn crashed() -> AppState {
        let mut state = AppState::default();
        state.crash = Some(CrashState::new("render panic"));
        state
    }

    const RESET: Action = Action::Crash(CrashAction::ResetRequested);

    fn request_reset(store: Arc<RecordingStore>, state: &AppState) -> (bool, Vec<Action>) {
        let runtime = Runtime::new().unwrap();
        let mut mw = CrashMiddleware::new(runtime.handle().clone(), store);
        let (dispatcher, rx) = testing::dispatcher();
        let forwarded = mw.handle(
            &Action::Crash(CrashAction::ResetRequested),
            state,
            &dispatcher,
        );
        let actions = if forwarded {
            testing::collect_until(&rx, |a| {
                matches!(
                    a,
                    Action::StatusBar(_) | Action::Crash(CrashAction::ResetFailed(_))
                )
            })
        } else {
            testing::drain(&rx)
        };
        (forwarded, actions)
    }

    #[test]
    fn test_successful_reset() {
        let store = Arc::new(RecordingStore::new(WorkspaceSnapshot::default()));
        let (forwarded, actions) = request_reset(store.clone(), &crashed());

        assert!(forwarded);
        assert!(matches!(
            actions.as_slice(),
            [
                Action::Crash(CrashAction::ResetSucceeded),
                Action::StatusBar(StatusBarAction::Push { .. })
            ]
        ));
        assert_eq!(store.calls(), vec![StoreCall::ResetLocalData]);
    }

    #[test]
    fn test_failed_reset_reports_error() {
        let store = Arc::new(RecordingStore::failing(
            WorkspaceSnapshot::default(),
            "permission denied",
        ));
        let (_, actions) = request_reset(store, &crashed());

        assert!(matches!(
            actions.as_slice(),
            [Action::Crash(CrashAction::ResetFailed(e))] if e == "permission denied"
        ));
    }

    #[test]
    fn test_reset_in_progress_is_ignored() {
        let store = Arc::new(RecordingStore::new(WorkspaceSnapshot::default()));
        let mut state = crashed();
        state.crash = Some(CrashState {
            error: "render panic".to_string(),
            resetting: true,
        });

        let (forwarded, actions) = request_reset(store.clone(), &state);
        assert!(!forwarded);
        assert!(actions.is_empty());
        assert!(store.calls().is_empty());
    }

    #[test]
    fn test_repeated_request_before_state_catches_up_is_ignored() {
        let runtime = Runtime::new().unwrap();
        let gate = Arc::new(Notify::new());
        let store = Arc::new(RecordingStore::gated(
            WorkspaceSnapshot::default(),
            gate.clone(),
        ));
        let mut mw = CrashMiddleware::new(runtime.handle().clone(), store.clone());
        let (dispatcher, rx) = testing::dispatcher();
        // Neither request sees `resetting` in the published state
        let state = crashed();

        assert!(mw.handle(&RESET, &state, &dispatcher));
        assert!(!mw.handle(&RESET, &state, &dispatcher));

        gate.notify_one();
        testing::collect_until(&rx, |a| matches!(a, Action::StatusBar(_)));
        assert_eq!(store.calls(), vec![StoreCall::ResetLocalData]);
    }

    #[test]
    fn test_reset_can_run_again_after_failure() {
        let runtime = Runtime::new().unwrap();
        let store = Arc::new(RecordingStore::failing(
            WorkspaceSnapshot::default(),
            "disk full",
        ));
        let mut mw = CrashMiddleware::new(runtime.handle().clone(), store.clone());
        let (dispatcher, rx) = testing::dispatcher();
        let is_failed = |a: &Action| matches!(a, Action::Crash(CrashAction::ResetFailed(_)));

        assert!(mw.handle(&RESET, &crashed(), &dispatcher));
        testing::collect_until(&rx, is_failed);
        assert!(mw.handle(&RESET, &crashed(), &dispatcher));
        testing::collect_until(&rx, is_failed);

        assert_eq!(
            store.calls(),
            vec![StoreCall::ResetLocalData, StoreCall::ResetLocalData]
        );
    }
}
