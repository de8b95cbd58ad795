//! Palette entries
//!
//! An entry is a display projection (`label`, `description`, `section`) plus a
//! [`PaletteAction`] that carries only the payload its source kind needs.

use super::execution::ExecutionContext;
use crate::workspace::{
    AppSection, GitFocusZone, GitPanel, SnapshotId, WorkspaceId, WorktreeManagerIntent,
};
use std::path::PathBuf;
use strum::Display;

/// Grouping label shown as a section header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Section {
    Workspaces,
    Worktrees,
    Snapshots,
    #[strum(serialize = "Global Commands")]
    GlobalCommands,
    #[strum(serialize = "Pane Actions")]
    PaneActions,
    Git,
}

/// What running an entry does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteAction {
    /// Open the new-workspace modal
    CreateWorkspace,
    OpenWorktreeManager,
    OpenGitView(GitPanel),
    RefreshWorktrees,
    CreateWorktree,
    OpenWorktree { path: PathBuf },
    SwitchWorkspace { id: WorkspaceId },
    SetPaneCount(usize),
    SetEchoInput(bool),
    SaveSnapshot,
    RestoreSnapshot { id: SnapshotId },
    /// Type a preset command into every pane without submitting it
    QuickCommand(String),
    /// Submit literal text from typed-command mode
    TypedCommand(String),
}

impl PaletteAction {
    /// Run against the workspace stores
    pub async fn run(&self, ctx: &ExecutionContext) -> anyhow::Result<()> {
        match self {
            Self::CreateWorkspace => {
                (ctx.open_workspace_modal)();
                Ok(())
            }
            Self::OpenWorktreeManager => {
                ctx.store
                    .open_worktree_manager(WorktreeManagerIntent::Browse)
                    .await
            }
            Self::OpenGitView(panel) => {
                ctx.store.set_active_section(AppSection::Git).await?;
                ctx.git.set_active_panel(*panel).await?;
                ctx.git.set_focus_zone(GitFocusZone::Panel).await
            }
            Self::RefreshWorktrees => ctx.store.refresh_worktrees().await,
            Self::CreateWorktree => {
                ctx.store
                    .open_worktree_manager(WorktreeManagerIntent::Create)
                    .await
            }
            Self::OpenWorktree { path } => ctx.store.import_worktree_as_workspace(path).await,
            Self::SwitchWorkspace { id } => ctx.store.set_active_workspace(id).await,
            Self::SetPaneCount(count) => ctx.store.set_active_workspace_pane_count(*count).await,
            Self::SetEchoInput(enabled) => ctx.store.set_echo_input(*enabled).await,
            Self::SaveSnapshot => ctx.store.save_snapshot().await,
            Self::RestoreSnapshot { id } => ctx.store.restore_snapshot(id).await,
            Self::QuickCommand(command) => ctx.store.run_global_command(command, false).await,
            Self::TypedCommand(command) => ctx.store.run_global_command(command, true).await,
        }
    }
}

/// One invocable row of the palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Stable across catalog rebuilds for the same logical action
    pub id: String,
    pub section: Section,
    pub label: String,
    pub description: Option<String>,
    pub keywords: String,
    pub action: PaletteAction,
}

impl PaletteEntry {
    pub fn new(
        id: impl Into<String>,
        section: Section,
        label: impl Into<String>,
        action: PaletteAction,
    ) -> Self {
        Self {
            id: id.into(),
            section,
            label: label.into(),
            description: None,
            keywords: String::new(),
            action,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    /// Case-insensitive substring match; `needle` must already be lowercase
    pub fn matches(&self, needle: &str) -> bool {
        let haystack = format!(
            "{} {} {} {}",
            self.label,
            self.description.as_deref().unwrap_or_default(),
            self.keywords,
            self.section
        );
        haystack.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_display_names() {
        assert_eq!(Section::GlobalCommands.to_string(), "Global Commands");
        assert_eq!(Section::PaneActions.to_string(), "Pane Actions");
        assert_eq!(Section::Git.to_string(), "Git");
    }

    #[test]
    fn test_matches_covers_all_text_fields() {
        let entry = PaletteEntry::new(
            "pane-count-4",
            Section::PaneActions,
            "Use 4 panes",
            PaletteAction::SetPaneCount(4),
        )
        .with_description("Resize the grid")
        .with_keywords("layout split");

        assert!(entry.matches("use 4"));
        assert!(entry.matches("grid"));
        assert!(entry.matches("split"));
        assert!(entry.matches("pane actions"));
        assert!(!entry.matches("snapshot"));
    }
}
