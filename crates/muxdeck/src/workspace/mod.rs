//! Workspace domain: model, store interfaces and the in-memory store

mod local_store;
mod model;
mod store;
#[cfg(test)]
pub mod testing;
mod worktrees;

pub use local_store::LocalWorkspaceStore;
pub use model::{
    grid_dimensions, AppSection, Direction, GitFocusZone, GitPanel, Pane, PaneId, Snapshot,
    SnapshotId, Workspace, WorkspaceId, WorkspaceSnapshot, WorktreeEntry, WorktreeManagerIntent,
    MAX_PANES,
};
pub use store::{GitViewStore, StoreError, WorkspaceStore};
pub use worktrees::GitWorktreeSource;
