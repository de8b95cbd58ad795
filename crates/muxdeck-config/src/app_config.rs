//! Application configuration
//!
//! Configuration loaded from `.muxdeck.toml`. Every field has a default, so a
//! partial file only overrides what it names.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from `.muxdeck.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Commands offered in the command palette as "send to all panes" entries
    #[serde(default = "default_quick_commands")]
    pub quick_commands: Vec<String>,

    /// Pane-count presets offered in the command palette
    #[serde(default = "default_pane_presets")]
    pub pane_presets: Vec<usize>,

    /// Maximum number of worktree entries listed in the command palette
    #[serde(default = "default_worktree_limit")]
    pub worktree_limit: usize,

    /// Maximum number of snapshot-restore entries listed in the command palette
    #[serde(default = "default_snapshot_limit")]
    pub snapshot_limit: usize,

    /// Pane count for newly created workspaces
    #[serde(default = "default_pane_count")]
    pub default_pane_count: usize,

    /// Run an update check right after startup
    #[serde(default)]
    pub check_updates_on_start: bool,

    /// URL of the update manifest (JSON with `version` and optional `notes`)
    #[serde(default)]
    pub update_endpoint: Option<String>,
}

fn default_quick_commands() -> Vec<String> {
    vec![
        "npm test".to_string(),
        "cargo check".to_string(),
        "pnpm build".to_string(),
    ]
}

fn default_pane_presets() -> Vec<usize> {
    vec![1, 2, 4, 6, 8, 10, 12, 14, 16]
}

fn default_worktree_limit() -> usize {
    30
}

fn default_snapshot_limit() -> usize {
    8
}

fn default_pane_count() -> usize {
    4
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            quick_commands: default_quick_commands(),
            pane_presets: default_pane_presets(),
            worktree_limit: default_worktree_limit(),
            snapshot_limit: default_snapshot_limit(),
            default_pane_count: default_pane_count(),
            check_updates_on_start: false,
            update_endpoint: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(
            config.quick_commands,
            vec!["npm test", "cargo check", "pnpm build"]
        );
        assert_eq!(config.pane_presets, vec![1, 2, 4, 6, 8, 10, 12, 14, 16]);
        assert_eq!(config.worktree_limit, 30);
        assert_eq!(config.snapshot_limit, 8);
        assert!(!config.check_updates_on_start);
        assert!(config.update_endpoint.is_none());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            quick_commands = ["make test"]
            check_updates_on_start = true
            update_endpoint = "https://example.invalid/muxdeck/latest.json"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.quick_commands, vec!["make test"]);
        assert!(config.check_updates_on_start);
        assert_eq!(
            config.update_endpoint.as_deref(),
            Some("https://example.invalid/muxdeck/latest.json")
        );
        // Untouched fields keep their defaults
        assert_eq!(config.worktree_limit, 30);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            snapshot_limit = 3
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.snapshot_limit, 3);
        assert_eq!(config.default_pane_count, 4);
        assert_eq!(config.pane_presets.len(), 9);
    }
}
