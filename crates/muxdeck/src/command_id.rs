//! Command identifiers
//!
//! Commands are the semantic actions users trigger from the keyboard. Each
//! has a unique ID referenced by keybindings and shown in hints.
//!
//! The enum is serialized as snake_case (e.g., `PaneCountIncrease` -> `"pane_count_increase"`).

use crate::actions::{
    Action, CommandPaletteAction, ContextAction, GlobalAction, MenuAction, NavigationAction,
    NewWorkspaceAction, WorkspaceAction, WorkspaceRequest,
};
use crate::workspace::{Direction, WorkspaceSnapshot, MAX_PANES};
use serde::{Deserialize, Serialize};

/// Where a command sits in keyboard routing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandScope {
    /// Global shortcut table, first match wins
    Shortcut,
    /// Application keys evaluated after the shortcut table
    App,
    /// Handled by the active view, subject to gating
    View,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Panes ===
    FocusPaneLeft,
    FocusPaneRight,
    FocusPaneUp,
    FocusPaneDown,
    /// Zoom the focused pane, or restore the grid
    ToggleZoom,
    PaneCountDecrease,
    PaneCountIncrease,

    // === Overlays ===
    NewWorkspaceOpen,
    CommandPaletteOpen,
    /// Close menu, new-workspace modal and palette
    CloseOverlays,
    MenuToggle,

    // === Navigation ===
    NavigateNext,
    NavigatePrevious,
    NavigateNextField,
    NavigatePreviousField,
    Confirm,

    // === General ===
    Quit,
}

impl CommandId {
    pub fn scope(self) -> CommandScope {
        match self {
            Self::FocusPaneLeft
            | Self::FocusPaneRight
            | Self::FocusPaneUp
            | Self::FocusPaneDown
            | Self::ToggleZoom
            | Self::PaneCountDecrease
            | Self::PaneCountIncrease
            | Self::NewWorkspaceOpen
            | Self::CommandPaletteOpen
            | Self::CloseOverlays => CommandScope::Shortcut,

            Self::MenuToggle | Self::Quit => CommandScope::App,

            Self::NavigateNext
            | Self::NavigatePrevious
            | Self::NavigateNextField
            | Self::NavigatePreviousField
            | Self::Confirm => CommandScope::View,
        }
    }

    /// Convert this command ID to an Action
    ///
    /// Pane-count commands compute their target from the active workspace in
    /// `workspace`; decrease floors at 1, increase caps at [`MAX_PANES`].
    pub fn to_action(self, workspace: &WorkspaceSnapshot) -> Action {
        let request = |r| Action::Workspace(WorkspaceAction::Request(r));
        let pane_count = workspace
            .active_workspace()
            .map(|w| w.pane_count())
            .unwrap_or(0);

        match self {
            Self::FocusPaneLeft => request(WorkspaceRequest::MoveFocus(Direction::Left)),
            Self::FocusPaneRight => request(WorkspaceRequest::MoveFocus(Direction::Right)),
            Self::FocusPaneUp => request(WorkspaceRequest::MoveFocus(Direction::Up)),
            Self::FocusPaneDown => request(WorkspaceRequest::MoveFocus(Direction::Down)),
            Self::ToggleZoom => request(WorkspaceRequest::ToggleZoom),
            Self::PaneCountDecrease => {
                request(WorkspaceRequest::SetPaneCount(pane_count.saturating_sub(1).max(1)))
            }
            Self::PaneCountIncrease => {
                request(WorkspaceRequest::SetPaneCount((pane_count + 1).min(MAX_PANES)))
            }

            Self::NewWorkspaceOpen => Action::NewWorkspace(NewWorkspaceAction::Open),
            Self::CommandPaletteOpen => Action::CommandPalette(CommandPaletteAction::Open),
            Self::CloseOverlays => Action::Global(GlobalAction::CloseOverlays),
            Self::MenuToggle => Action::Menu(MenuAction::Toggle),

            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateNextField => Action::Navigate(NavigationAction::NextField),
            Self::NavigatePreviousField => Action::Navigate(NavigationAction::PreviousField),
            Self::Confirm => Action::ViewContext(ContextAction::Confirm),

            Self::Quit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Short title shown in hints
    pub fn title(&self) -> &'static str {
        match self {
            Self::FocusPaneLeft => "Focus left pane",
            Self::FocusPaneRight => "Focus right pane",
            Self::FocusPaneUp => "Focus pane above",
            Self::FocusPaneDown => "Focus pane below",
            Self::ToggleZoom => "Zoom pane",
            Self::PaneCountDecrease => "Fewer panes",
            Self::PaneCountIncrease => "More panes",
            Self::NewWorkspaceOpen => "New workspace",
            Self::CommandPaletteOpen => "Command palette",
            Self::CloseOverlays => "Close",
            Self::MenuToggle => "Menu",
            Self::NavigateNext => "Down",
            Self::NavigatePrevious => "Up",
            Self::NavigateNextField => "Next field",
            Self::NavigatePreviousField => "Previous field",
            Self::Confirm => "Select",
            Self::Quit => "Quit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::FocusPaneLeft
            | Self::FocusPaneRight
            | Self::FocusPaneUp
            | Self::FocusPaneDown => "Move pane focus within the active workspace",
            Self::ToggleZoom => "Toggle zoom on the focused pane",
            Self::PaneCountDecrease => "Remove one pane from the active workspace",
            Self::PaneCountIncrease => "Add one pane to the active workspace",
            Self::NewWorkspaceOpen => "Open the new workspace dialog",
            Self::CommandPaletteOpen => "Search and run workspace actions",
            Self::CloseOverlays => "Close every open overlay",
            Self::MenuToggle => "Show or hide the section menu",
            Self::NavigateNext => "Move selection down",
            Self::NavigatePrevious => "Move selection up",
            Self::NavigateNextField => "Move focus to the next field",
            Self::NavigatePreviousField => "Move focus to the previous field",
            Self::Confirm => "Activate the highlighted item",
            Self::Quit => "Exit the application",
        }
    }
}
