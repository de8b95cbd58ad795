//! Status Bar Actions
//!
//! Actions for the status bar - user feedback for operations.

use crate::state::StatusKind;

/// Actions for the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusBarAction {
    /// Push a new status message
    Push {
        kind: StatusKind,
        message: String,
        source: String,
    },
    /// Clear all status messages
    Clear,
}

impl StatusBarAction {
    fn push(kind: StatusKind, message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::Push {
            kind,
            message: message.into(),
            source: source.into(),
        }
    }

    /// Create a running status action
    pub fn running(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::push(StatusKind::Running, message, source)
    }

    /// Create a success status action
    pub fn success(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::push(StatusKind::Success, message, source)
    }

    /// Create an error status action
    pub fn error(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::push(StatusKind::Error, message, source)
    }

    /// Create a warning status action
    pub fn warning(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::push(StatusKind::Warning, message, source)
    }

    /// Create an info status action
    pub fn info(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::push(StatusKind::Info, message, source)
    }
}
