//! View model for the command palette
//!
//! Pre-computes all display data for the command palette view, separating
//! data preparation from rendering logic.

use crate::command_id::CommandId;
use crate::palette::{EmptyState, Resolution};
use crate::state::AppState;
use ratatui::style::Color;

pub const AWAITING_COMMAND_MESSAGE: &str = "Type a command after > to run it in every pane";
pub const NO_MATCHES_MESSAGE: &str = "No matching actions";

/// View model for the command palette
#[derive(Debug, Clone)]
pub struct CommandPaletteViewModel {
    /// Entries currently visible (after filtering)
    pub total_entries: usize,
    pub input_text: String,
    /// Is input empty (for placeholder styling)
    pub input_is_empty: bool,
    pub input_focused: bool,
    /// Section headers and entries, in display order
    pub rows: Vec<PaletteRow>,
    /// Position of the highlighted entry within `rows`
    pub selected_row: Option<usize>,
    /// Shown instead of the list when nothing is visible
    pub empty_message: Option<&'static str>,
    pub selected_description: Option<String>,
    pub footer_hints: FooterHints,
}

/// Pre-computed footer hints for keyboard shortcuts
#[derive(Debug, Clone)]
pub struct FooterHints {
    pub navigate_up: String,
    pub navigate_down: String,
    pub switch_focus: String,
    pub close: String,
}

#[derive(Debug, Clone)]
pub enum PaletteRow {
    Header(String),
    Entry(EntryRow),
}

#[derive(Debug, Clone)]
pub struct EntryRow {
    pub is_selected: bool,
    /// The entry is executing
    pub is_running: bool,
    /// Selection or busy marker
    pub indicator: &'static str,
    pub label: String,
    pub fg_color: Color,
    pub bg_color: Color,
}

impl CommandPaletteViewModel {
    /// Build view model from application state
    pub fn from_state(state: &AppState) -> Self {
        let resolution = state.palette_resolution();
        Self::build(state, &resolution)
    }

    fn build(state: &AppState, resolution: &Resolution) -> Self {
        let theme = &state.theme;
        let palette = &state.command_palette;

        let mut rows = Vec::with_capacity(resolution.len() * 2);
        let mut selected_row = None;

        for group in resolution.groups() {
            rows.push(PaletteRow::Header(group.section.to_string()));

            for (idx, entry) in resolution
                .entries
                .iter()
                .enumerate()
                .skip(group.start)
                .take(group.len)
            {
                let is_selected = idx == palette.selected_index;
                let is_running = palette.running_id.as_deref() == Some(entry.id.as_str());
                if is_selected {
                    selected_row = Some(rows.len());
                }

                let indicator = match (is_running, is_selected) {
                    (true, _) => "⏳ ",
                    (false, true) => "> ",
                    (false, false) => "  ",
                };

                let (fg_color, bg_color) = if is_selected {
                    (theme.active_fg, theme.selected_bg)
                } else {
                    (theme.text_primary, Color::Reset)
                };

                rows.push(PaletteRow::Entry(EntryRow {
                    is_selected,
                    is_running,
                    indicator,
                    label: entry.label.clone(),
                    fg_color,
                    bg_color,
                }));
            }
        }

        let empty_message = resolution.empty_state().map(|empty| match empty {
            EmptyState::AwaitingCommand => AWAITING_COMMAND_MESSAGE,
            EmptyState::NoMatches => NO_MATCHES_MESSAGE,
        });

        let selected_description = resolution
            .entries
            .get(palette.selected_index)
            .and_then(|entry| entry.description.clone());

        let footer_hints = FooterHints {
            navigate_up: state
                .keymap
                .compact_hint_for_command(CommandId::NavigatePrevious)
                .unwrap_or_else(|| "↑".to_string()),
            navigate_down: state
                .keymap
                .compact_hint_for_command(CommandId::NavigateNext)
                .unwrap_or_else(|| "↓".to_string()),
            switch_focus: state
                .keymap
                .compact_hint_for_command(CommandId::NavigateNextField)
                .unwrap_or_else(|| "Tab".to_string()),
            close: state
                .keymap
                .compact_hint_for_command(CommandId::CloseOverlays)
                .unwrap_or_else(|| "Esc".to_string()),
        };

        Self {
            total_entries: resolution.len(),
            input_text: palette.query.clone(),
            input_is_empty: palette.query.is_empty(),
            input_focused: palette.input_focused,
            rows,
            selected_row,
            empty_message,
            selected_description,
            footer_hints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_model(query: &str) -> CommandPaletteViewModel {
        let mut state = AppState::default();
        state.command_palette.query = query.to_string();
        CommandPaletteViewModel::from_state(&state)
    }

    #[test]
    fn test_bare_sentinel_shows_awaiting_command() {
        let vm = view_model(">");
        assert!(vm.rows.is_empty());
        assert_eq!(vm.empty_message, Some(AWAITING_COMMAND_MESSAGE));
        assert_ne!(vm.empty_message, Some(NO_MATCHES_MESSAGE));
    }

    #[test]
    fn test_no_matches_message() {
        let vm = view_model("zzzz-nothing-matches");
        assert_eq!(vm.empty_message, Some(NO_MATCHES_MESSAGE));
    }

    #[test]
    fn test_rows_start_with_section_header() {
        let vm = view_model("");
        assert!(matches!(vm.rows.first(), Some(PaletteRow::Header(h)) if h == "Workspaces"));
        assert_eq!(vm.selected_row, Some(1));
        assert_eq!(vm.empty_message, None);
    }

    #[test]
    fn test_running_row_shows_busy_marker() {
        let mut state = AppState::default();
        state.command_palette.running_id = Some("snapshot-save".to_string());
        let vm = CommandPaletteViewModel::from_state(&state);

        let running: Vec<_> = vm
            .rows
            .iter()
            .filter_map(|row| match row {
                PaletteRow::Entry(e) if e.is_running => Some(e.indicator),
                _ => None,
            })
            .collect();
        assert_eq!(running, vec!["⏳ "]);
    }
}
