//! Crash Screen State

/// Present while the crash screen is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrashState {
    /// Panic message, or the error of a failed reset
    pub error: String,
    /// A local-data reset is running
    pub resetting: bool,
}

impl CrashState {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            resetting: false,
        }
    }
}
