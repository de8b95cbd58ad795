//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar.

use crate::state::{AppState, StatusKind};
use ratatui::style::{Color, Modifier, Style};

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub emoji: &'static str,
    pub message: String,
    /// Timestamp formatted for display (e.g., "14:32:05")
    pub timestamp: String,
    /// What produced the message
    pub source: String,
    pub message_style: Style,
    pub bg_color: Color,
    /// Style for metadata (timestamp, source)
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;

        if let Some(msg) = state.status_bar.latest() {
            let fg_color = match msg.kind {
                StatusKind::Running | StatusKind::Warning => theme.status_warning,
                StatusKind::Success => theme.status_success,
                StatusKind::Error => theme.status_error,
                StatusKind::Info => theme.status_info,
            };

            Self {
                emoji: msg.kind.emoji(),
                message: msg.message.clone(),
                timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
                source: msg.source.clone(),
                message_style: Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
                bg_color: theme.bg_primary,
                metadata_style: Style::default().fg(theme.text_muted),
            }
        } else {
            let hint = state
                .keymap
                .hint_for_command(crate::command_id::CommandId::CommandPaletteOpen)
                .unwrap_or("Ctrl+P");
            Self {
                emoji: "👋",
                message: format!("Welcome to muxdeck, press {} for the command palette", hint),
                timestamp: String::new(),
                source: String::new(),
                message_style: Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
                bg_color: theme.bg_primary,
                metadata_style: Style::default().fg(theme.text_muted),
            }
        }
    }
}
