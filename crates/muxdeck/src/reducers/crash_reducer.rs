//! Crash boundary reducer

use crate::actions::CrashAction;
use crate::state::CrashState;

pub fn reduce_crash(state: Option<CrashState>, action: &CrashAction) -> Option<CrashState> {
    match action {
        CrashAction::Caught(error) => Some(CrashState::new(error.clone())),
        CrashAction::Retry | CrashAction::ResetSucceeded => None,
        CrashAction::ResetRequested => state.map(|crash| CrashState {
            resetting: true,
            ..crash
        }),
        // Show the crash screen again with the reset error
        CrashAction::ResetFailed(error) => Some(CrashState::new(error.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_reset_shows_new_error() {
        let state = reduce_crash(None, &CrashAction::Caught("render panic".to_string()));
        let state = reduce_crash(state, &CrashAction::ResetRequested);
        assert_eq!(state.as_ref().map(|c| c.resetting), Some(true));

        let state = reduce_crash(state, &CrashAction::ResetFailed("disk full".to_string()));
        assert_eq!(state, Some(CrashState::new("disk full")));
    }

    #[test]
    fn test_retry_clears_crash() {
        let state = reduce_crash(None, &CrashAction::Caught("boom".to_string()));
        assert_eq!(reduce_crash(state, &CrashAction::Retry), None);
    }
}
