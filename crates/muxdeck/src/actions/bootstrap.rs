//! Bootstrap actions

/// Actions for application startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapAction {
    /// Subscribe to the workspace store and discover worktrees
    Start,
}
