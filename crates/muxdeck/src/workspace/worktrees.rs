//! Worktree discovery
//!
//! Lists Git worktrees with `git worktree list --porcelain`.

use super::model::WorktreeEntry;
use anyhow::{bail, Context};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;

/// Source of worktree entries
#[async_trait]
pub trait WorktreeSource: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<WorktreeEntry>>;
}

/// Discovers worktrees of the repository containing `repo_dir`
pub struct GitWorktreeSource {
    repo_dir: PathBuf,
}

impl GitWorktreeSource {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }
}

#[async_trait]
impl WorktreeSource for GitWorktreeSource {
    async fn list(&self) -> anyhow::Result<Vec<WorktreeEntry>> {
        let output = Command::new("git")
            .args(["worktree", "list", "--porcelain"])
            .current_dir(&self.repo_dir)
            .output()
            .await
            .context("Failed to launch git")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("git worktree list failed: {}", stderr.trim());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let entries = parse_porcelain(&stdout);
        log::debug!(
            "Discovered {} worktrees in {}",
            entries.len(),
            self.repo_dir.display()
        );
        Ok(entries)
    }
}

/// Parse `git worktree list --porcelain` output
///
/// Records are separated by blank lines. Bare repositories are skipped since
/// they cannot hold panes.
pub fn parse_porcelain(output: &str) -> Vec<WorktreeEntry> {
    let mut entries = Vec::new();
    let mut current: Option<WorktreeEntry> = None;
    let mut bare = false;

    for line in output.lines().chain(std::iter::once("")) {
        let line = line.trim_end();
        if line.is_empty() {
            if let Some(entry) = current.take() {
                if !bare {
                    entries.push(entry);
                }
            }
            bare = false;
            continue;
        }

        let (key, value) = line.split_once(' ').unwrap_or((line, ""));
        match key {
            "worktree" => {
                current = Some(WorktreeEntry {
                    path: PathBuf::from(value),
                    branch: None,
                    head: None,
                });
            }
            "HEAD" => {
                if let Some(entry) = current.as_mut() {
                    entry.head = Some(value.to_string());
                }
            }
            "branch" => {
                if let Some(entry) = current.as_mut() {
                    let name = value.strip_prefix("refs/heads/").unwrap_or(value);
                    entry.branch = Some(name.to_string());
                }
            }
            "bare" => bare = true,
            _ => {}
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_porcelain() {
        let output = "\
worktree /repos/app
HEAD 1111111111111111111111111111111111111111
branch refs/heads/main

worktree /repos/app-feature
HEAD 2222222222222222222222222222222222222222
branch refs/heads/feature/login

worktree /repos/app-detached
HEAD 3333333333333333333333333333333333333333
detached
";
        let entries = parse_porcelain(output);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].path, PathBuf::from("/repos/app"));
        assert_eq!(entries[0].branch.as_deref(), Some("main"));
        assert_eq!(entries[1].branch.as_deref(), Some("feature/login"));
        assert_eq!(entries[2].branch, None);
        assert_eq!(
            entries[2].head.as_deref(),
            Some("3333333333333333333333333333333333333333")
        );
    }

    #[test]
    fn test_parse_porcelain_skips_bare() {
        let output = "worktree /repos/app.git\nbare\n\nworktree /repos/app\nbranch refs/heads/main\n";
        let entries = parse_porcelain(output);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, PathBuf::from("/repos/app"));
    }

    #[test]
    fn test_parse_porcelain_empty() {
        assert!(parse_porcelain("").is_empty());
    }
}
