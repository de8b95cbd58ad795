//! Update check actions

/// Actions for the update checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdaterAction {
    /// Fetch the update manifest and report the result
    Check,
}
