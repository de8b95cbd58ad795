//! Command palette reducer
//!
//! Handles CommandPalette-specific actions. View-stack changes (opening and
//! closing the overlay) are done by the app reducer.

use crate::actions::CommandPaletteAction;
use crate::palette::{build_catalog, resolve, selection};
use crate::state::CommandPaletteState;
use crate::workspace::WorkspaceSnapshot;
use muxdeck_config::AppConfig;

/// Reducer for command palette state.
///
/// Pure state transformation; the visible list is re-derived from
/// `workspace` and `config` when its length matters.
pub fn reduce_command_palette(
    mut state: CommandPaletteState,
    action: &CommandPaletteAction,
    workspace: &WorkspaceSnapshot,
    config: &AppConfig,
) -> CommandPaletteState {
    match action {
        CommandPaletteAction::Open => {
            state = CommandPaletteState {
                session: state.session.wrapping_add(1),
                ..CommandPaletteState::default()
            };
        }

        CommandPaletteAction::Char(c) => {
            state.query.push(*c);
            state.selected_index = 0;
        }

        CommandPaletteAction::Backspace => {
            state.query.pop();
            state.selected_index = 0;
        }

        CommandPaletteAction::Clear => {
            state.query.clear();
            state.selected_index = 0;
        }

        CommandPaletteAction::ToggleFocus => {
            state.input_focused = !state.input_focused;
        }

        CommandPaletteAction::Close => {
            state.query.clear();
            state.selected_index = 0;
            state.running_id = None;
            state.input_focused = true;
        }

        CommandPaletteAction::NavigateNext => {
            let catalog = build_catalog(workspace, config);
            let len = resolve(&state.query, &catalog).len();
            state.selected_index = selection::next(state.selected_index, len);
        }

        CommandPaletteAction::NavigatePrev => {
            state.selected_index = selection::prev(state.selected_index);
        }

        // The middleware resolves and starts the entry
        CommandPaletteAction::Execute => {}

        CommandPaletteAction::ExecutionStarted { id, session } => {
            if *session == state.session {
                state.running_id = Some(id.clone());
            }
        }

        CommandPaletteAction::ExecutionFinished { session, error, .. } => {
            if *session != state.session {
                log::debug!("Ignoring execution result from stale palette session {}", session);
            } else {
                state.running_id = None;
                if error.is_none() {
                    state.query.clear();
                    state.selected_index = 0;
                    state.input_focused = true;
                }
            }
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: CommandPaletteState, action: CommandPaletteAction) -> CommandPaletteState {
        reduce_command_palette(
            state,
            &action,
            &WorkspaceSnapshot::default(),
            &AppConfig::default(),
        )
    }

    fn open() -> CommandPaletteState {
        reduce(CommandPaletteState::default(), CommandPaletteAction::Open)
    }

    #[test]
    fn test_open_resets_and_starts_session() {
        let mut state = open();
        state.query = "snap".to_string();
        state.selected_index = 3;
        state.input_focused = false;

        let reopened = reduce(state, CommandPaletteAction::Open);
        assert_eq!(reopened.session, 2);
        assert!(reopened.query.is_empty());
        assert_eq!(reopened.selected_index, 0);
        assert!(reopened.input_focused);
    }

    #[test]
    fn test_navigate_next_stops_at_last_entry() {
        let total = build_catalog(&WorkspaceSnapshot::default(), &AppConfig::default()).len();
        let mut state = open();
        for _ in 0..total + 5 {
            state = reduce(state, CommandPaletteAction::NavigateNext);
        }
        assert_eq!(state.selected_index, total - 1);
    }

    #[test]
    fn test_navigate_prev_stops_at_zero() {
        let mut state = open();
        state = reduce(state, CommandPaletteAction::NavigatePrev);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_typing_resets_selection() {
        let mut state = open();
        state = reduce(state, CommandPaletteAction::NavigateNext);
        state = reduce(state, CommandPaletteAction::Char('g'));
        assert_eq!(state.query, "g");
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_running_marker_lifecycle() {
        let mut state = open();
        state.query = "pane".to_string();
        state = reduce(
            state,
            CommandPaletteAction::ExecutionStarted {
                id: "pane-count-4".to_string(),
                session: 1,
            },
        );
        assert_eq!(state.running_id.as_deref(), Some("pane-count-4"));

        state = reduce(
            state,
            CommandPaletteAction::ExecutionFinished {
                id: "pane-count-4".to_string(),
                session: 1,
                error: Some("boom".to_string()),
            },
        );
        assert_eq!(state.running_id, None);
        // Failure keeps the query so the user can retry
        assert_eq!(state.query, "pane");
    }

    #[test]
    fn test_stale_session_results_are_ignored() {
        let mut state = open();
        state = reduce(state, CommandPaletteAction::Open);
        state.running_id = Some("current".to_string());

        state = reduce(
            state,
            CommandPaletteAction::ExecutionFinished {
                id: "old".to_string(),
                session: 1,
                error: None,
            },
        );
        assert_eq!(state.running_id.as_deref(), Some("current"));
    }
}
