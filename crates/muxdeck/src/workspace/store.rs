//! Workspace store interfaces
//!
//! The UI talks to workspace state only through these traits: it reads
//! snapshots, subscribes to changes and calls mutators. Implementations own
//! all side effects, which keeps the palette and shortcut logic testable
//! without a terminal.

use super::model::{
    AppSection, Direction, GitFocusZone, GitPanel, PaneId, SnapshotId, WorkspaceId,
    WorkspaceSnapshot, WorktreeManagerIntent,
};
use async_trait::async_trait;
use std::path::Path;
use tokio::sync::watch;

/// Typed failures of the workspace store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("workspace not found: {0}")]
    WorkspaceNotFound(WorkspaceId),
    #[error("snapshot not found: {0}")]
    SnapshotNotFound(SnapshotId),
    #[error("pane not found: {0}")]
    PaneNotFound(PaneId),
    #[error("no active workspace")]
    NoActiveWorkspace,
    #[error("workspace name must not be empty")]
    EmptyWorkspaceName,
    #[error("command must not be empty")]
    EmptyCommand,
}

/// Workspace state store
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; mutators are called from tasks on
/// the shared tokio runtime.
#[async_trait]
pub trait WorkspaceStore: Send + Sync {
    /// Current state
    fn snapshot(&self) -> WorkspaceSnapshot;

    /// Receive every published state change
    fn subscribe(&self) -> watch::Receiver<WorkspaceSnapshot>;

    /// Create a workspace and make it active
    async fn create_workspace(&self, name: &str, path: Option<&Path>)
        -> anyhow::Result<WorkspaceId>;

    async fn set_active_workspace(&self, id: &WorkspaceId) -> anyhow::Result<()>;

    /// Resize the active workspace grid
    async fn set_active_workspace_pane_count(&self, count: usize) -> anyhow::Result<()>;

    async fn set_echo_input(&self, enabled: bool) -> anyhow::Result<()>;

    async fn set_active_section(&self, section: AppSection) -> anyhow::Result<()>;

    /// Save the active workspace as a new snapshot
    async fn save_snapshot(&self) -> anyhow::Result<()>;

    async fn restore_snapshot(&self, id: &SnapshotId) -> anyhow::Result<()>;

    /// Send `command` to every pane of the active workspace
    ///
    /// With `execute == false` the text is typed but not submitted.
    async fn run_global_command(&self, command: &str, execute: bool) -> anyhow::Result<()>;

    async fn open_worktree_manager(&self, intent: WorktreeManagerIntent) -> anyhow::Result<()>;

    /// Re-discover worktrees on disk
    async fn refresh_worktrees(&self) -> anyhow::Result<()>;

    /// Open a worktree as a workspace, switching to it if already open
    async fn import_worktree_as_workspace(&self, path: &Path) -> anyhow::Result<()>;

    async fn move_focused_pane(
        &self,
        workspace_id: &WorkspaceId,
        direction: Direction,
    ) -> anyhow::Result<()>;

    /// Zoom `pane_id` in the active workspace, or unzoom if it already is
    async fn toggle_active_workspace_zoom(&self, pane_id: PaneId) -> anyhow::Result<()>;

    /// Drop all locally held workspace data
    async fn reset_local_data(&self) -> anyhow::Result<()>;
}

/// Git control center store
#[async_trait]
pub trait GitViewStore: Send + Sync {
    async fn set_active_panel(&self, panel: GitPanel) -> anyhow::Result<()>;

    async fn set_focus_zone(&self, zone: GitFocusZone) -> anyhow::Result<()>;
}
