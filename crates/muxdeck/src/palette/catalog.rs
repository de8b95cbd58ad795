//! Action catalog builder
//!
//! Derives the full, ordered list of palette entries from a workspace
//! snapshot. The catalog is rebuilt from scratch whenever the snapshot
//! changes; nothing here runs an action.

use super::entry::{PaletteAction, PaletteEntry, Section};
use crate::workspace::{GitPanel, WorkspaceSnapshot, MAX_PANES};
use muxdeck_config::AppConfig;
use std::collections::HashSet;
use strum::IntoEnumIterator;

/// Build the catalog in its fixed order
///
/// Static actions, worktrees, workspace switches, pane presets, echo toggle,
/// save snapshot, snapshot restores, quick commands. Later entries whose id
/// was already used are dropped.
pub fn build_catalog(snapshot: &WorkspaceSnapshot, config: &AppConfig) -> Vec<PaletteEntry> {
    let mut entries = static_entries();
    entries.extend(worktree_entries(snapshot, config.worktree_limit));
    entries.extend(workspace_entries(snapshot));
    entries.extend(pane_preset_entries(&config.pane_presets));
    entries.push(echo_toggle_entry(snapshot.echo_input));
    entries.push(
        PaletteEntry::new(
            "snapshot-save",
            Section::Snapshots,
            "Save snapshot",
            PaletteAction::SaveSnapshot,
        )
        .with_description("Save the active workspace layout")
        .with_keywords("store checkpoint"),
    );
    entries.extend(snapshot_entries(snapshot, config.snapshot_limit));
    entries.extend(quick_command_entries(&config.quick_commands));

    dedup_by_id(entries)
}

fn static_entries() -> Vec<PaletteEntry> {
    let mut entries = vec![
        PaletteEntry::new(
            "workspace-create",
            Section::Workspaces,
            "Create workspace",
            PaletteAction::CreateWorkspace,
        )
        .with_description("Open the new workspace dialog")
        .with_keywords("new add"),
        PaletteEntry::new(
            "worktree-manager",
            Section::Worktrees,
            "Open worktree manager",
            PaletteAction::OpenWorktreeManager,
        )
        .with_keywords("browse branches"),
    ];

    entries.extend(GitPanel::iter().map(|panel| {
        let name = panel.to_string();
        PaletteEntry::new(
            format!("git-{}", name.to_lowercase()),
            Section::Git,
            format!("Git: {}", name),
            PaletteAction::OpenGitView(panel),
        )
        .with_description(format!("Show the Git {} panel", name.to_lowercase()))
    }));

    entries.push(
        PaletteEntry::new(
            "worktree-refresh",
            Section::Worktrees,
            "Refresh worktrees",
            PaletteAction::RefreshWorktrees,
        )
        .with_keywords("reload rescan"),
    );
    entries.push(
        PaletteEntry::new(
            "worktree-create",
            Section::Worktrees,
            "Create worktree",
            PaletteAction::CreateWorktree,
        )
        .with_keywords("new branch"),
    );

    entries
}

fn worktree_entries(snapshot: &WorkspaceSnapshot, limit: usize) -> Vec<PaletteEntry> {
    snapshot
        .worktrees
        .iter()
        .take(limit)
        .map(|worktree| {
            let branch = worktree.display_branch();
            let path = worktree.path.display().to_string();
            let entry = match snapshot.workspace_for_path(&worktree.path) {
                Some(workspace) => PaletteEntry::new(
                    format!("worktree-{}", path),
                    Section::Worktrees,
                    format!("Switch to {}", branch),
                    PaletteAction::SwitchWorkspace {
                        id: workspace.id.clone(),
                    },
                ),
                None => PaletteEntry::new(
                    format!("worktree-{}", path),
                    Section::Worktrees,
                    format!("Open {}", branch),
                    PaletteAction::OpenWorktree {
                        path: worktree.path.clone(),
                    },
                ),
            };
            entry
                .with_description(path)
                .with_keywords(format!("worktree {}", branch))
        })
        .collect()
}

fn workspace_entries(snapshot: &WorkspaceSnapshot) -> Vec<PaletteEntry> {
    snapshot
        .workspaces
        .iter()
        .map(|workspace| {
            let mut entry = PaletteEntry::new(
                format!("workspace-{}", workspace.id),
                Section::Workspaces,
                format!("Switch to workspace {}", workspace.name),
                PaletteAction::SwitchWorkspace {
                    id: workspace.id.clone(),
                },
            )
            .with_keywords(workspace.branch.clone().unwrap_or_default());
            if snapshot.active_workspace_id.as_ref() == Some(&workspace.id) {
                entry = entry.with_description("Active");
            }
            entry
        })
        .collect()
}

fn pane_preset_entries(presets: &[usize]) -> Vec<PaletteEntry> {
    presets
        .iter()
        .filter(|count| (1..=MAX_PANES).contains(*count))
        .map(|count| {
            let label = if *count == 1 {
                "Use 1 pane".to_string()
            } else {
                format!("Use {} panes", count)
            };
            PaletteEntry::new(
                format!("pane-count-{}", count),
                Section::PaneActions,
                label,
                PaletteAction::SetPaneCount(*count),
            )
            .with_keywords("layout grid")
        })
        .collect()
}

fn echo_toggle_entry(echo_input: bool) -> PaletteEntry {
    let label = if echo_input {
        "Disable input echo"
    } else {
        "Enable input echo"
    };
    PaletteEntry::new(
        "echo-toggle",
        Section::GlobalCommands,
        label,
        PaletteAction::SetEchoInput(!echo_input),
    )
    .with_description("Mirror typed input to every pane")
    .with_keywords("broadcast")
}

fn snapshot_entries(snapshot: &WorkspaceSnapshot, limit: usize) -> Vec<PaletteEntry> {
    snapshot
        .snapshots
        .iter()
        .take(limit)
        .map(|saved| {
            PaletteEntry::new(
                format!("snapshot-{}", saved.id),
                Section::Snapshots,
                format!("Restore {}", saved.name),
                PaletteAction::RestoreSnapshot {
                    id: saved.id.clone(),
                },
            )
            .with_description(saved.created_at.format("%Y-%m-%d %H:%M").to_string())
        })
        .collect()
}

fn quick_command_entries(commands: &[String]) -> Vec<PaletteEntry> {
    commands
        .iter()
        .filter(|command| !command.trim().is_empty())
        .map(|command| {
            PaletteEntry::new(
                format!("quick-{}", command),
                Section::GlobalCommands,
                format!("Type \"{}\" in all panes", command),
                PaletteAction::QuickCommand(command.clone()),
            )
            .with_keywords("run command")
        })
        .collect()
}

fn dedup_by_id(entries: Vec<PaletteEntry>) -> Vec<PaletteEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| {
            let fresh = seen.insert(entry.id.clone());
            if !fresh {
                log::debug!("Dropping duplicate palette entry: {}", entry.id);
            }
            fresh
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::{Snapshot, SnapshotId, Workspace, WorkspaceId, WorktreeEntry};
    use chrono::Local;
    use std::path::PathBuf;

    fn workspace(id: &str, name: &str, path: Option<&str>) -> Workspace {
        Workspace {
            id: WorkspaceId(id.to_string()),
            name: name.to_string(),
            worktree_path: path.map(PathBuf::from),
            branch: None,
            panes: vec![],
            focused_pane: None,
            zoomed_pane: None,
        }
    }

    fn worktree(path: &str, branch: &str) -> WorktreeEntry {
        WorktreeEntry {
            path: PathBuf::from(path),
            branch: Some(branch.to_string()),
            head: None,
        }
    }

    fn ids(entries: &[PaletteEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_empty_snapshot_order() {
        let catalog = build_catalog(&WorkspaceSnapshot::default(), &AppConfig::default());
        assert_eq!(
            ids(&catalog),
            vec![
                "workspace-create",
                "worktree-manager",
                "git-status",
                "git-branches",
                "git-history",
                "worktree-refresh",
                "worktree-create",
                "pane-count-1",
                "pane-count-2",
                "pane-count-4",
                "pane-count-6",
                "pane-count-8",
                "pane-count-10",
                "pane-count-12",
                "pane-count-14",
                "pane-count-16",
                "echo-toggle",
                "snapshot-save",
                "quick-npm test",
                "quick-cargo check",
                "quick-pnpm build",
            ]
        );
    }

    #[test]
    fn test_worktree_label_depends_on_open_workspace() {
        let snapshot = WorkspaceSnapshot {
            workspaces: vec![workspace("ws-1", "app", Some("C:\\Repos\\App\\"))],
            worktrees: vec![
                worktree("c:/repos/app", "main"),
                worktree("c:/repos/app-login", "feature/login"),
            ],
            ..Default::default()
        };
        let catalog = build_catalog(&snapshot, &AppConfig::default());

        let labels: Vec<&str> = catalog
            .iter()
            .filter(|e| e.id.starts_with("worktree-c:"))
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Switch to main", "Open feature/login"]);
    }

    #[test]
    fn test_sections_follow_fixed_order() {
        let snapshot = WorkspaceSnapshot {
            workspaces: vec![workspace("ws-1", "api", None)],
            active_workspace_id: Some(WorkspaceId("ws-1".to_string())),
            worktrees: vec![worktree("/repos/api", "main")],
            snapshots: vec![Snapshot {
                id: SnapshotId("snap-1".to_string()),
                name: "api @ 10:00:00".to_string(),
                created_at: Local::now(),
                workspace: workspace("ws-1", "api", None),
            }],
            ..Default::default()
        };
        let catalog = build_catalog(&snapshot, &AppConfig::default());

        let position = |id: &str| catalog.iter().position(|e| e.id == id).unwrap();
        assert!(position("worktree-create") < position("worktree-/repos/api"));
        assert!(position("worktree-/repos/api") < position("workspace-ws-1"));
        assert!(position("workspace-ws-1") < position("pane-count-1"));
        assert!(position("pane-count-16") < position("echo-toggle"));
        assert!(position("snapshot-save") < position("snapshot-snap-1"));
        assert!(position("snapshot-snap-1") < position("quick-npm test"));
    }

    #[test]
    fn test_caps_worktrees_and_snapshots() {
        let snapshot = WorkspaceSnapshot {
            worktrees: (0..40)
                .map(|i| worktree(&format!("/repos/wt-{}", i), &format!("b{}", i)))
                .collect(),
            snapshots: (0..12)
                .map(|i| Snapshot {
                    id: SnapshotId(format!("snap-{}", i)),
                    name: format!("s{}", i),
                    created_at: Local::now(),
                    workspace: workspace("ws-1", "api", None),
                })
                .collect(),
            ..Default::default()
        };
        let catalog = build_catalog(&snapshot, &AppConfig::default());

        let worktrees = catalog
            .iter()
            .filter(|e| e.id.starts_with("worktree-/"))
            .count();
        let restores = catalog
            .iter()
            .filter(|e| matches!(e.action, PaletteAction::RestoreSnapshot { .. }))
            .collect::<Vec<_>>();
        assert_eq!(worktrees, 30);
        assert_eq!(restores.len(), 8);
        // Store order is kept: most recent first
        assert_eq!(restores[0].id, "snapshot-snap-0");
    }

    #[test]
    fn test_echo_toggle_label_follows_state() {
        let on = WorkspaceSnapshot {
            echo_input: true,
            ..Default::default()
        };
        let catalog = build_catalog(&on, &AppConfig::default());
        let toggle = catalog.iter().find(|e| e.id == "echo-toggle").unwrap();
        assert_eq!(toggle.label, "Disable input echo");
        assert_eq!(toggle.action, PaletteAction::SetEchoInput(false));
    }

    #[test]
    fn test_duplicate_ids_are_dropped() {
        let config = AppConfig {
            quick_commands: vec!["make".to_string(), "make".to_string()],
            pane_presets: vec![2, 2, 0, 40],
            ..Default::default()
        };
        let catalog = build_catalog(&WorkspaceSnapshot::default(), &config);
        let ids = ids(&catalog);
        assert_eq!(ids.iter().filter(|id| **id == "quick-make").count(), 1);
        assert_eq!(ids.iter().filter(|id| id.starts_with("pane-count")).count(), 1);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }
}
