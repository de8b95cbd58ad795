//! Workspace domain model
//!
//! These types describe what the workspace store publishes. The UI never
//! mutates them directly; it reads the latest [`WorkspaceSnapshot`] and asks
//! the store for changes.

use chrono::{DateTime, Local};
use std::fmt;
use std::path::{Path, PathBuf};
use strum::{Display, EnumIter};

/// Upper bound for panes in a single workspace grid
pub const MAX_PANES: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkspaceId(pub String);

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaneId(pub u64);

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pane-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnapshotId(pub String);

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Direction for pane focus movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Top-level section shown in the main view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum AppSection {
    #[default]
    Workspaces,
    Worktrees,
    Git,
    Settings,
}

/// Panel shown in the Git control center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum GitPanel {
    #[default]
    Status,
    Branches,
    History,
}

/// Which part of the Git control center owns keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum GitFocusZone {
    #[default]
    Sidebar,
    Panel,
}

/// Why the worktree manager was opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum WorktreeManagerIntent {
    Browse,
    Create,
}

/// One line of input sent to a pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneInput {
    pub text: String,
    /// `true` when the input was submitted (Enter), `false` when only typed
    pub executed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    pub id: PaneId,
    pub title: String,
    pub history: Vec<PaneInput>,
}

impl Pane {
    pub fn new(id: PaneId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            history: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    pub worktree_path: Option<PathBuf>,
    pub branch: Option<String>,
    pub panes: Vec<Pane>,
    pub focused_pane: Option<PaneId>,
    pub zoomed_pane: Option<PaneId>,
}

impl Workspace {
    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    pub fn pane_index(&self, pane_id: PaneId) -> Option<usize> {
        self.panes.iter().position(|p| p.id == pane_id)
    }

    /// Index of the focused pane, falling back to the first pane
    pub fn focused_index(&self) -> Option<usize> {
        self.focused_pane
            .and_then(|id| self.pane_index(id))
            .or(if self.panes.is_empty() { None } else { Some(0) })
    }
}

/// A saved copy of a workspace, restorable later
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub id: SnapshotId,
    pub name: String,
    pub created_at: DateTime<Local>,
    pub workspace: Workspace,
}

/// A Git worktree discovered on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorktreeEntry {
    pub path: PathBuf,
    pub branch: Option<String>,
    pub head: Option<String>,
}

impl WorktreeEntry {
    /// Branch name, or the directory name for detached worktrees
    pub fn display_branch(&self) -> String {
        if let Some(branch) = &self.branch {
            return branch.clone();
        }
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// State of the Git control center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GitViewState {
    pub active_panel: GitPanel,
    pub focus_zone: GitFocusZone,
}

/// Everything the UI reads from the workspace store
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkspaceSnapshot {
    pub workspaces: Vec<Workspace>,
    pub active_workspace_id: Option<WorkspaceId>,
    /// Most recent first
    pub snapshots: Vec<Snapshot>,
    pub echo_input: bool,
    pub worktrees: Vec<WorktreeEntry>,
    pub active_section: AppSection,
    pub worktree_manager: Option<WorktreeManagerIntent>,
    pub git: GitViewState,
}

impl WorkspaceSnapshot {
    pub fn active_workspace(&self) -> Option<&Workspace> {
        let id = self.active_workspace_id.as_ref()?;
        self.workspace(id)
    }

    pub fn workspace(&self, id: &WorkspaceId) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| &w.id == id)
    }

    /// Find the open workspace whose worktree path matches `path` after normalization
    pub fn workspace_for_path(&self, path: &Path) -> Option<&Workspace> {
        let wanted = normalize_worktree_path(path);
        self.workspaces.iter().find(|w| {
            w.worktree_path
                .as_deref()
                .is_some_and(|p| normalize_worktree_path(p) == wanted)
        })
    }
}

/// Normalize a worktree path for comparison
///
/// Backslashes become forward slashes, trailing slashes are stripped and the
/// result is lowercased.
pub fn normalize_worktree_path(path: &Path) -> String {
    let raw = path.to_string_lossy().replace('\\', "/");
    let trimmed = raw.trim_end_matches('/');
    // Keep a lone root as "/" rather than an empty string
    let trimmed = if trimmed.is_empty() && raw.starts_with('/') {
        "/"
    } else {
        trimmed
    };
    trimmed.to_lowercase()
}

/// Columns and rows used to lay out `pane_count` panes
pub fn grid_dimensions(pane_count: usize) -> (usize, usize) {
    if pane_count == 0 {
        return (0, 0);
    }
    let mut cols = 1;
    while cols * cols < pane_count {
        cols += 1;
    }
    let rows = pane_count.div_ceil(cols);
    (cols, rows)
}

/// Index of the pane reached by moving from `from` in `direction`
///
/// Movement stops at the grid edge; moving into an empty trailing cell is
/// not possible.
pub fn neighbor_index(pane_count: usize, from: usize, direction: Direction) -> usize {
    let (cols, _) = grid_dimensions(pane_count);
    if cols == 0 || from >= pane_count {
        return from;
    }
    let (row, col) = (from / cols, from % cols);
    let target = match direction {
        Direction::Left if col > 0 => from - 1,
        Direction::Right if col + 1 < cols => from + 1,
        Direction::Up if row > 0 => from - cols,
        Direction::Down => from + cols,
        _ => from,
    };
    if target < pane_count {
        target
    } else {
        from
    }
}
