//! Status Bar State

use chrono::{DateTime, Local};
use std::collections::VecDeque;

const MAX_HISTORY: usize = 100;

/// Kind of status message (determines icon and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Running,
    Success,
    Error,
    Warning,
    Info,
}

impl StatusKind {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Running => "⏳",
            Self::Success => "✅",
            Self::Error => "🚨",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
        }
    }
}

/// A single status message with metadata
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub timestamp: DateTime<Local>,
    pub kind: StatusKind,
    pub message: String,
    /// What produced the message, e.g. "palette" or "updater"
    pub source: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, message: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            message: message.into(),
            source: source.into(),
        }
    }
}

/// Status bar state - bounded history of messages, newest at the back
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    pub messages: VecDeque<StatusMessage>,
}

impl StatusBarState {
    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.back()
    }

    /// Push a new message, trimming the oldest if over the limit
    pub fn push(&mut self, message: StatusMessage) {
        self.messages.push_back(message);
        if self.messages.len() > MAX_HISTORY {
            self.messages.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_bounded() {
        let mut state = StatusBarState::default();
        for i in 0..MAX_HISTORY + 10 {
            state.push(StatusMessage::new(StatusKind::Info, format!("m{}", i), "test"));
        }
        assert_eq!(state.messages.len(), MAX_HISTORY);
        assert_eq!(state.messages.front().unwrap().message, "m10");
        assert_eq!(
            state.latest().unwrap().message,
            format!("m{}", MAX_HISTORY + 9)
        );
    }
}
