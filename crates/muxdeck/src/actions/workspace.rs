//! Workspace actions
//!
//! `Request` variants are executed against the workspace store by the
//! workspace middleware; `SnapshotChanged` carries published store state to
//! the reducers.

use crate::workspace::{AppSection, Direction, WorkspaceSnapshot};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum WorkspaceAction {
    /// The store published a new snapshot
    SnapshotChanged(Box<WorkspaceSnapshot>),
    /// Ask the store for a change
    Request(WorkspaceRequest),
}

/// A mutation requested from the keyboard or a modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceRequest {
    /// Move pane focus within the active workspace
    MoveFocus(Direction),
    /// Toggle zoom on the focused pane of the active workspace
    ToggleZoom,
    /// Resize the active workspace grid
    SetPaneCount(usize),
    Create {
        name: String,
        path: Option<PathBuf>,
    },
    SetActiveSection(AppSection),
    RefreshWorktrees,
}
