//! Query resolution
//!
//! A query is either a search over the catalog or, when it starts with
//! [`COMMAND_SENTINEL`], a literal command to run in every pane.

use super::entry::{PaletteAction, PaletteEntry, Section};

pub const COMMAND_SENTINEL: char = '>';

/// How the query was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    Search,
    TypedCommand,
}

/// Why the visible list is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Sentinel typed without a command yet
    AwaitingCommand,
    NoMatches,
}

/// A run of consecutive entries sharing one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGroup {
    pub section: Section,
    /// Index of the group's first entry in the visible list
    pub start: usize,
    pub len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub mode: QueryMode,
    pub entries: Vec<PaletteEntry>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.is_empty() {
            return None;
        }
        Some(match self.mode {
            QueryMode::TypedCommand => EmptyState::AwaitingCommand,
            QueryMode::Search => EmptyState::NoMatches,
        })
    }

    pub fn groups(&self) -> Vec<SectionGroup> {
        group_by_section(&self.entries)
    }
}

/// Resolve `query` against `catalog`, keeping catalog order
pub fn resolve(query: &str, catalog: &[PaletteEntry]) -> Resolution {
    let trimmed = query.trim();

    if let Some(rest) = trimmed.strip_prefix(COMMAND_SENTINEL) {
        let command = rest.trim();
        let entries = if command.is_empty() {
            Vec::new()
        } else {
            vec![typed_command_entry(command)]
        };
        return Resolution {
            mode: QueryMode::TypedCommand,
            entries,
        };
    }

    let entries = if trimmed.is_empty() {
        catalog.to_vec()
    } else {
        let needle = trimmed.to_lowercase();
        catalog
            .iter()
            .filter(|entry| entry.matches(&needle))
            .cloned()
            .collect()
    };

    Resolution {
        mode: QueryMode::Search,
        entries,
    }
}

fn typed_command_entry(command: &str) -> PaletteEntry {
    PaletteEntry::new(
        "typed-command",
        Section::GlobalCommands,
        format!("Run {}", command),
        PaletteAction::TypedCommand(command.to_string()),
    )
    .with_description("Send to every pane of the active workspace")
}

/// Group consecutive entries by section, in list order
pub fn group_by_section(entries: &[PaletteEntry]) -> Vec<SectionGroup> {
    let mut groups: Vec<SectionGroup> = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        match groups.last_mut() {
            Some(group) if group.section == entry.section => group.len += 1,
            _ => groups.push(SectionGroup {
                section: entry.section,
                start: index,
                len: 1,
            }),
        }
    }
    groups
}
