//! In-memory fakes for the store traits

use super::model::{
    AppSection, Direction, GitFocusZone, GitPanel, PaneId, SnapshotId, WorkspaceId,
    WorkspaceSnapshot, WorktreeManagerIntent,
};
use super::store::{GitViewStore, WorkspaceStore};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::sync::{watch, Notify};

/// A single mutator call observed by [`RecordingStore`]
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    CreateWorkspace(String, Option<PathBuf>),
    SetActiveWorkspace(WorkspaceId),
    SetPaneCount(usize),
    SetEchoInput(bool),
    SetActiveSection(AppSection),
    SaveSnapshot,
    RestoreSnapshot(SnapshotId),
    RunGlobalCommand(String, bool),
    OpenWorktreeManager(WorktreeManagerIntent),
    RefreshWorktrees,
    ImportWorktree(PathBuf),
    MoveFocusedPane(WorkspaceId, Direction),
    ToggleZoom(PaneId),
    ResetLocalData,
    SetActivePanel(GitPanel),
    SetFocusZone(GitFocusZone),
}

/// Store that records every call and never changes its snapshot
pub struct RecordingStore {
    state: watch::Sender<WorkspaceSnapshot>,
    calls: Mutex<Vec<StoreCall>>,
    failure: Option<String>,
    gate: Option<Arc<Notify>>,
}

impl RecordingStore {
    pub fn new(snapshot: WorkspaceSnapshot) -> Self {
        let (state, _) = watch::channel(snapshot);
        Self {
            state,
            calls: Mutex::new(Vec::new()),
            failure: None,
            gate: None,
        }
    }

    /// Every mutator fails with `message` after recording the call
    pub fn failing(snapshot: WorkspaceSnapshot, message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new(snapshot)
        }
    }

    /// Every mutator waits for `gate` to be notified before returning
    pub fn gated(snapshot: WorkspaceSnapshot, gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(snapshot)
        }
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    async fn record(&self, call: StoreCall) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(call);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.failure {
            Some(message) => Err(anyhow::anyhow!(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl WorkspaceStore for RecordingStore {
    fn snapshot(&self) -> WorkspaceSnapshot {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<WorkspaceSnapshot> {
        self.state.subscribe()
    }

    async fn create_workspace(
        &self,
        name: &str,
        path: Option<&Path>,
    ) -> anyhow::Result<WorkspaceId> {
        self.record(StoreCall::CreateWorkspace(
            name.to_string(),
            path.map(Path::to_path_buf),
        ))
        .await?;
        Ok(WorkspaceId(format!("ws-{}", name)))
    }

    async fn set_active_workspace(&self, id: &WorkspaceId) -> anyhow::Result<()> {
        self.record(StoreCall::SetActiveWorkspace(id.clone())).await
    }

    async fn set_active_workspace_pane_count(&self, count: usize) -> anyhow::Result<()> {
        self.record(StoreCall::SetPaneCount(count)).await
    }

    async fn set_echo_input(&self, enabled: bool) -> anyhow::Result<()> {
        self.record(StoreCall::SetEchoInput(enabled)).await
    }

    async fn set_active_section(&self, section: AppSection) -> anyhow::Result<()> {
        self.record(StoreCall::SetActiveSection(section)).await
    }

    async fn save_snapshot(&self) -> anyhow::Result<()> {
        self.record(StoreCall::SaveSnapshot).await
    }

    async fn restore_snapshot(&self, id: &SnapshotId) -> anyhow::Result<()> {
        self.record(StoreCall::RestoreSnapshot(id.clone())).await
    }

    async fn run_global_command(&self, command: &str, execute: bool) -> anyhow::Result<()> {
        self.record(StoreCall::RunGlobalCommand(command.to_string(), execute))
            .await
    }

    async fn open_worktree_manager(&self, intent: WorktreeManagerIntent) -> anyhow::Result<()> {
        self.record(StoreCall::OpenWorktreeManager(intent)).await
    }

    async fn refresh_worktrees(&self) -> anyhow::Result<()> {
        self.record(StoreCall::RefreshWorktrees).await
    }

    async fn import_worktree_as_workspace(&self, path: &Path) -> anyhow::Result<()> {
        self.record(StoreCall::ImportWorktree(path.to_path_buf()))
            .await
    }

    async fn move_focused_pane(
        &self,
        workspace_id: &WorkspaceId,
        direction: Direction,
    ) -> anyhow::Result<()> {
        self.record(StoreCall::MoveFocusedPane(workspace_id.clone(), direction))
            .await
    }

    async fn toggle_active_workspace_zoom(&self, pane_id: PaneId) -> anyhow::Result<()> {
        self.record(StoreCall::ToggleZoom(pane_id)).await
    }

    async fn reset_local_data(&self) -> anyhow::Result<()> {
        self.record(StoreCall::ResetLocalData).await
    }
}

#[async_trait]
impl GitViewStore for RecordingStore {
    async fn set_active_panel(&self, panel: GitPanel) -> anyhow::Result<()> {
        self.record(StoreCall::SetActivePanel(panel)).await
    }

    async fn set_focus_zone(&self, zone: GitFocusZone) -> anyhow::Result<()> {
        self.record(StoreCall::SetFocusZone(zone)).await
    }
}
