//! In-memory workspace store
//!
//! Holds the whole state in a `tokio::sync::watch` channel: every successful
//! mutation publishes a new snapshot to all subscribers. Panes do not run
//! processes; they keep a transcript of the input sent to them.
//!
//! Saved snapshots and pane transcripts are capped; the oldest entries are
//! dropped first.

use super::model::{
    normalize_worktree_path, neighbor_index, AppSection, Direction, GitFocusZone, GitPanel, Pane,
    PaneId, PaneInput, Snapshot, SnapshotId, Workspace, WorkspaceId, WorkspaceSnapshot,
    WorktreeManagerIntent, MAX_PANES,
};
use super::store::{GitViewStore, StoreError, WorkspaceStore};
use super::worktrees::WorktreeSource;
use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Local;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

const MAX_SNAPSHOTS: usize = 50;
const MAX_PANE_HISTORY: usize = 500;

pub struct LocalWorkspaceStore {
    state: watch::Sender<WorkspaceSnapshot>,
    worktrees: Arc<dyn WorktreeSource>,
    default_pane_count: usize,
    next_id: AtomicU64,
}

impl LocalWorkspaceStore {
    pub fn new(worktrees: Arc<dyn WorktreeSource>, default_pane_count: usize) -> Self {
        let (state, _) = watch::channel(WorkspaceSnapshot::default());
        Self {
            state,
            worktrees,
            default_pane_count: default_pane_count.clamp(1, MAX_PANES),
            next_id: AtomicU64::new(1),
        }
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    fn new_panes(&self, count: usize) -> Vec<Pane> {
        (0..count)
            .map(|i| Pane::new(PaneId(self.next_id()), format!("Terminal {}", i + 1)))
            .collect()
    }

    /// Apply a fallible mutation; subscribers are notified only on success
    fn update<T>(
        &self,
        f: impl FnOnce(&mut WorkspaceSnapshot) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        let mut outcome = None;
        self.state.send_if_modified(|state| {
            let result = f(state);
            let modified = result.is_ok();
            outcome = Some(result);
            modified
        });
        outcome.unwrap_or_else(|| Err(anyhow!("workspace update did not run")))
    }

    fn active_workspace_mut(state: &mut WorkspaceSnapshot) -> Result<&mut Workspace, StoreError> {
        let id = state
            .active_workspace_id
            .clone()
            .ok_or(StoreError::NoActiveWorkspace)?;
        state
            .workspaces
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(StoreError::WorkspaceNotFound(id))
    }

    fn workspace_name_for_path(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string())
    }
}

#[async_trait]
impl WorkspaceStore for LocalWorkspaceStore {
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
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyWorkspaceName.into());
        }

        let id = WorkspaceId(format!("ws-{}", self.next_id()));
        let panes = self.new_panes(self.default_pane_count);
        let path: Option<PathBuf> = path.map(Path::to_path_buf);

        self.update(|state| {
            let branch = path.as_deref().and_then(|p| {
                let wanted = normalize_worktree_path(p);
                state
                    .worktrees
                    .iter()
                    .find(|w| normalize_worktree_path(&w.path) == wanted)
                    .and_then(|w| w.branch.clone())
            });
            let focused_pane = panes.first().map(|p| p.id);
            state.workspaces.push(Workspace {
                id: id.clone(),
                name: name.to_string(),
                worktree_path: path,
                branch,
                panes,
                focused_pane,
                zoomed_pane: None,
            });
            state.active_workspace_id = Some(id.clone());
            state.active_section = AppSection::Workspaces;
            Ok(())
        })?;

        log::info!("Created workspace {} ({})", name, id);
        Ok(id)
    }

    async fn set_active_workspace(&self, id: &WorkspaceId) -> anyhow::Result<()> {
        self.update(|state| {
            if state.workspace(id).is_none() {
                return Err(StoreError::WorkspaceNotFound(id.clone()).into());
            }
            state.active_workspace_id = Some(id.clone());
            state.active_section = AppSection::Workspaces;
            Ok(())
        })
    }

    async fn set_active_workspace_pane_count(&self, count: usize) -> anyhow::Result<()> {
        let count = count.clamp(1, MAX_PANES);

        self.update(|state| {
            let workspace = Self::active_workspace_mut(state)?;
            let current = workspace.panes.len();
            if count < current {
                workspace.panes.truncate(count);
            } else {
                for i in current..count {
                    workspace
                        .panes
                        .push(Pane::new(PaneId(self.next_id()), format!("Terminal {}", i + 1)));
                }
            }

            let live = |id: Option<PaneId>, ws: &Workspace| id.filter(|id| ws.pane_index(*id).is_some());
            workspace.focused_pane = live(workspace.focused_pane, workspace)
                .or_else(|| workspace.panes.last().map(|p| p.id));
            workspace.zoomed_pane = live(workspace.zoomed_pane, workspace);
            Ok(())
        })
    }

    async fn set_echo_input(&self, enabled: bool) -> anyhow::Result<()> {
        self.update(|state| {
            state.echo_input = enabled;
            Ok(())
        })
    }

    async fn set_active_section(&self, section: AppSection) -> anyhow::Result<()> {
        self.update(|state| {
            state.active_section = section;
            if section != AppSection::Worktrees {
                state.worktree_manager = None;
            }
            Ok(())
        })
    }

    async fn save_snapshot(&self) -> anyhow::Result<()> {
        let id = SnapshotId(format!("snap-{}", self.next_id()));
        self.update(|state| {
            let workspace = Self::active_workspace_mut(state)?.clone();
            let created_at = Local::now();
            let name = format!("{} @ {}", workspace.name, created_at.format("%H:%M:%S"));
            state.snapshots.insert(
                0,
                Snapshot {
                    id,
                    name,
                    created_at,
                    workspace,
                },
            );
            state.snapshots.truncate(MAX_SNAPSHOTS);
            Ok(())
        })
    }

    async fn restore_snapshot(&self, id: &SnapshotId) -> anyhow::Result<()> {
        self.update(|state| {
            let snapshot = state
                .snapshots
                .iter()
                .find(|s| &s.id == id)
                .cloned()
                .ok_or_else(|| StoreError::SnapshotNotFound(id.clone()))?;

            let restored = snapshot.workspace;
            let workspace_id = restored.id.clone();
            match state.workspaces.iter_mut().find(|w| w.id == workspace_id) {
                Some(existing) => *existing = restored,
                None => state.workspaces.push(restored),
            }
            state.active_workspace_id = Some(workspace_id);
            state.active_section = AppSection::Workspaces;
            Ok(())
        })
    }

    async fn run_global_command(&self, command: &str, execute: bool) -> anyhow::Result<()> {
        let command = command.trim();
        if command.is_empty() {
            return Err(StoreError::EmptyCommand.into());
        }

        self.update(|state| {
            let workspace = Self::active_workspace_mut(state)?;
            for pane in &mut workspace.panes {
                pane.history.push(PaneInput {
                    text: command.to_string(),
                    executed: execute,
                });
                let overflow = pane.history.len().saturating_sub(MAX_PANE_HISTORY);
                pane.history.drain(..overflow);
            }
            log::info!(
                "Sent {:?} to {} panes of {} (execute: {})",
                command,
                workspace.panes.len(),
                workspace.id,
                execute
            );
            Ok(())
        })
    }

    async fn open_worktree_manager(&self, intent: WorktreeManagerIntent) -> anyhow::Result<()> {
        self.update(|state| {
            state.active_section = AppSection::Worktrees;
            state.worktree_manager = Some(intent);
            Ok(())
        })
    }

    async fn refresh_worktrees(&self) -> anyhow::Result<()> {
        let entries = self.worktrees.list().await?;
        self.update(|state| {
            state.worktrees = entries;
            Ok(())
        })
    }

    async fn import_worktree_as_workspace(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(existing) = self.snapshot().workspace_for_path(path) {
            let id = existing.id.clone();
            return self.set_active_workspace(&id).await;
        }

        let name = Self::workspace_name_for_path(path);
        self.create_workspace(&name, Some(path)).await.map(|_| ())
    }

    async fn move_focused_pane(
        &self,
        workspace_id: &WorkspaceId,
        direction: Direction,
    ) -> anyhow::Result<()> {
        self.update(|state| {
            let workspace = state
                .workspaces
                .iter_mut()
                .find(|w| &w.id == workspace_id)
                .ok_or_else(|| StoreError::WorkspaceNotFound(workspace_id.clone()))?;
            let Some(from) = workspace.focused_index() else {
                return Ok(());
            };
            let to = neighbor_index(workspace.panes.len(), from, direction);
            workspace.focused_pane = workspace.panes.get(to).map(|p| p.id);
            Ok(())
        })
    }

    async fn toggle_active_workspace_zoom(&self, pane_id: PaneId) -> anyhow::Result<()> {
        self.update(|state| {
            let workspace = Self::active_workspace_mut(state)?;
            if workspace.pane_index(pane_id).is_none() {
                return Err(StoreError::PaneNotFound(pane_id).into());
            }
            workspace.zoomed_pane = if workspace.zoomed_pane == Some(pane_id) {
                None
            } else {
                Some(pane_id)
            };
            workspace.focused_pane = Some(pane_id);
            Ok(())
        })
    }

    async fn reset_local_data(&self) -> anyhow::Result<()> {
        self.update(|state| {
            let worktrees = std::mem::take(&mut state.worktrees);
            *state = WorkspaceSnapshot {
                worktrees,
                ..Default::default()
            };
            Ok(())
        })?;
        log::warn!("Local workspace data was reset");
        Ok(())
    }
}

#[async_trait]
impl GitViewStore for LocalWorkspaceStore {
    async fn set_active_panel(&self, panel: GitPanel) -> anyhow::Result<()> {
        self.update(|state| {
            state.git.active_panel = panel;
            Ok(())
        })
    }

    async fn set_focus_zone(&self, zone: GitFocusZone) -> anyhow::Result<()> {
        self.update(|state| {
            state.git.focus_zone = zone;
            Ok(())
        })
    }
}
