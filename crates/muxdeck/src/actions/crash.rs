//! Crash screen actions

/// Actions for the render crash boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrashAction {
    /// Rendering panicked with this message
    Caught(String),
    /// Remount the UI
    Retry,
    /// Drop local workspace data, then remount
    ResetRequested,
    /// The reset itself failed
    ResetFailed(String),
    ResetSucceeded,
}
