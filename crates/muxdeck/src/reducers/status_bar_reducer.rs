//! Status Bar Reducer

use crate::actions::StatusBarAction;
use crate::state::{StatusBarState, StatusMessage};

pub fn reduce_status_bar(mut state: StatusBarState, action: &StatusBarAction) -> StatusBarState {
    match action {
        StatusBarAction::Push {
            kind,
            message,
            source,
        } => {
            state.push(StatusMessage::new(*kind, message.clone(), source.clone()));
        }
        StatusBarAction::Clear => {
            state.clear();
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusKind;

    #[test]
    fn test_push_then_clear() {
        let state = reduce_status_bar(
            StatusBarState::default(),
            &StatusBarAction::error("boom", "palette"),
        );
        let latest = state.latest().unwrap();
        assert_eq!(latest.kind, StatusKind::Error);
        assert_eq!(latest.source, "palette");

        let state = reduce_status_bar(state, &StatusBarAction::Clear);
        assert!(state.latest().is_none());
    }
}
