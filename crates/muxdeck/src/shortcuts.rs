//! Global shortcut dispatcher
//!
//! Classifies a key event against the shortcut table. Rules are evaluated in
//! priority order and the first match wins:
//!
//! 1. an editable surface has focus: nothing fires, the key passes through
//! 2. the shortcut table (pane focus/zoom/count, new workspace, palette, Esc)
//! 3. application keys (F10 menu, Ctrl+Q quit)

use crate::actions::Action;
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandScope;
use crate::keybindings::Keymap;
use crate::workspace::WorkspaceSnapshot;
use ratatui::crossterm::event::KeyEvent;

/// What kind of surface holds keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Editable,
    NonEditable,
}

impl FocusTarget {
    pub fn from_capabilities(capabilities: PanelCapabilities) -> Self {
        if capabilities.accepts_text_input() {
            Self::Editable
        } else {
            Self::NonEditable
        }
    }
}

pub struct ShortcutContext<'a> {
    pub focus: FocusTarget,
    pub workspace: &'a WorkspaceSnapshot,
}

#[derive(Debug)]
pub enum ShortcutOutcome {
    /// Focus is editable; the key belongs to the focused surface
    PassThrough,
    /// The key was consumed and yields exactly this action
    Handled(Action),
    /// No rule matched
    Unmatched,
}

pub fn dispatch_shortcut(key: &KeyEvent, keymap: &Keymap, ctx: &ShortcutContext) -> ShortcutOutcome {
    if ctx.focus == FocusTarget::Editable {
        return ShortcutOutcome::PassThrough;
    }

    [CommandScope::Shortcut, CommandScope::App]
        .into_iter()
        .find_map(|scope| keymap.match_key_in_scope(key, scope))
        .map(|command| {
            log::debug!("Shortcut matched: {:?}", command);
            ShortcutOutcome::Handled(command.to_action(ctx.workspace))
        })
        .unwrap_or(ShortcutOutcome::Unmatched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{
        CommandPaletteAction, GlobalAction, MenuAction, NewWorkspaceAction, WorkspaceAction,
        WorkspaceRequest,
    };
    use crate::keymap::default_keymap;
    use crate::workspace::{Direction, Pane, PaneId, Workspace, WorkspaceId};
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    fn snapshot_with_panes(count: u64) -> WorkspaceSnapshot {
        let id = WorkspaceId("ws-1".to_string());
        WorkspaceSnapshot {
            workspaces: vec![Workspace {
                id: id.clone(),
                name: "api".to_string(),
                worktree_path: None,
                branch: None,
                panes: (0..count).map(|i| Pane::new(PaneId(i), "Terminal")).collect(),
                focused_pane: Some(PaneId(0)),
                zoomed_pane: None,
            }],
            active_workspace_id: Some(id),
            ..Default::default()
        }
    }

    fn dispatch(key: KeyEvent, focus: FocusTarget, workspace: &WorkspaceSnapshot) -> ShortcutOutcome {
        let ctx = ShortcutContext { focus, workspace };
        dispatch_shortcut(&key, &default_keymap(), &ctx)
    }

    fn request(outcome: ShortcutOutcome) -> Option<WorkspaceRequest> {
        match outcome {
            ShortcutOutcome::Handled(Action::Workspace(WorkspaceAction::Request(r))) => Some(r),
            _ => None,
        }
    }

    #[test]
    fn test_editable_focus_blocks_pane_move() {
        let workspace = snapshot_with_panes(4);
        let key = KeyEvent::new(KeyCode::Left, KeyModifiers::CONTROL | KeyModifiers::ALT);
        assert!(matches!(
            dispatch(key, FocusTarget::Editable, &workspace),
            ShortcutOutcome::PassThrough
        ));
    }

    #[test]
    fn test_editable_focus_blocks_every_rule() {
        let workspace = snapshot_with_panes(4);
        for key in [
            KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL),
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::F(10), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('['), KeyModifiers::NONE),
        ] {
            assert!(matches!(
                dispatch(key, FocusTarget::Editable, &workspace),
                ShortcutOutcome::PassThrough
            ));
        }
    }

    #[test]
    fn test_pane_move_directions() {
        let workspace = snapshot_with_panes(4);
        let key = KeyEvent::new(KeyCode::Right, KeyModifiers::SUPER | KeyModifiers::ALT);
        assert_eq!(
            request(dispatch(key, FocusTarget::NonEditable, &workspace)),
            Some(WorkspaceRequest::MoveFocus(Direction::Right))
        );
    }

    #[test]
    fn test_zoom_toggle() {
        let workspace = snapshot_with_panes(4);
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL | KeyModifiers::ALT);
        assert_eq!(
            request(dispatch(key, FocusTarget::NonEditable, &workspace)),
            Some(WorkspaceRequest::ToggleZoom)
        );
    }

    #[test]
    fn test_bracket_shortcuts_request_counts_in_order() {
        let workspace = snapshot_with_panes(2);
        let shift_ctrl = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
        let requests: Vec<_> = [
            KeyEvent::new(KeyCode::Char('['), shift_ctrl),
            KeyEvent::new(KeyCode::Char(']'), shift_ctrl),
        ]
        .into_iter()
        .map(|key| request(dispatch(key, FocusTarget::NonEditable, &workspace)))
        .collect();

        assert_eq!(
            requests,
            vec![
                Some(WorkspaceRequest::SetPaneCount(1)),
                Some(WorkspaceRequest::SetPaneCount(3))
            ]
        );
    }

    #[test]
    fn test_overlay_shortcuts() {
        let workspace = WorkspaceSnapshot::default();
        assert!(matches!(
            dispatch(
                KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL),
                FocusTarget::NonEditable,
                &workspace
            ),
            ShortcutOutcome::Handled(Action::CommandPalette(CommandPaletteAction::Open))
        ));
        assert!(matches!(
            dispatch(
                KeyEvent::new(KeyCode::Char('n'), KeyModifiers::SUPER),
                FocusTarget::NonEditable,
                &workspace
            ),
            ShortcutOutcome::Handled(Action::NewWorkspace(NewWorkspaceAction::Open))
        ));
        assert!(matches!(
            dispatch(
                KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
                FocusTarget::NonEditable,
                &workspace
            ),
            ShortcutOutcome::Handled(Action::Global(GlobalAction::CloseOverlays))
        ));
    }

    #[test]
    fn test_app_keys_after_table() {
        let workspace = WorkspaceSnapshot::default();
        assert!(matches!(
            dispatch(
                KeyEvent::new(KeyCode::F(10), KeyModifiers::NONE),
                FocusTarget::NonEditable,
                &workspace
            ),
            ShortcutOutcome::Handled(Action::Menu(MenuAction::Toggle))
        ));
        assert!(matches!(
            dispatch(
                KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
                FocusTarget::NonEditable,
                &workspace
            ),
            ShortcutOutcome::Handled(Action::Global(GlobalAction::Quit))
        ));
    }

    #[test]
    fn test_plain_keys_are_unmatched() {
        let workspace = WorkspaceSnapshot::default();
        for key in [
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
        ] {
            assert!(matches!(
                dispatch(key, FocusTarget::NonEditable, &workspace),
                ShortcutOutcome::Unmatched
            ));
        }
    }
}
