//! Keybinding system
//!
//! Maps keyboard input to commands.
//!
//! # Design
//!
//! - `KeyBinding`: A mapping from a key pattern to a command ID
//! - `parse_key_pattern`: Textual representation of keys (e.g., "ctrl+p", "ctrl+alt+left")
//! - `Keymap`: Ordered collection of bindings with matching logic
//!
//! Key events are normalized before matching: the Cmd (SUPER) modifier counts
//! as Ctrl, and shifted brackets `{` / `}` match the physical `[` / `]` keys.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::command_id::{CommandId, CommandScope};

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key - e.g., "ctrl+p", "ctrl+shift+["
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+P"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    /// Create a new keybinding
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "j", "G" (uppercase implies SHIFT)
/// - With modifiers: "ctrl+p", "shift+tab", "ctrl+alt+enter", "cmd+n"
/// - Special keys: "tab", "enter", "esc", "backspace", "up", "down", "left", "right", "f1".."f12"
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();
    if pattern.is_empty() || pattern.contains(' ') {
        return None;
    }

    // For single characters, preserve case (e.g., "G" vs "g")
    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(ParsedKeyPattern {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let pattern_lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    // Extract modifiers; a trailing "+" is the key itself
    while let Some((modifier, rest)) = key_part.split_once('+') {
        if rest.is_empty() {
            break;
        }
        match modifier {
            "ctrl" | "control" | "cmd" | "super" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;
    Some(ParsedKeyPattern { code, modifiers })
}

/// Parse a key code string into a KeyCode
fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),

        // Function keys
        s if s.starts_with('f') && s.len() > 1 => {
            let num: u8 = s[1..].parse().ok()?;
            Some(KeyCode::F(num))
        }

        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),

        _ => None,
    }
}

/// Normalize a key event for matching
///
/// SUPER becomes CONTROL; `{` and `}` become `[` and `]` with SHIFT, so the
/// physical bracket keys match no matter how the terminal reports them.
pub fn normalize_key(key: &KeyEvent) -> (KeyCode, KeyModifiers) {
    let mut modifiers = key.modifiers;
    if modifiers.contains(KeyModifiers::SUPER) {
        modifiers.remove(KeyModifiers::SUPER);
        modifiers.insert(KeyModifiers::CONTROL);
    }
    modifiers.remove(KeyModifiers::HYPER | KeyModifiers::META);

    let code = match key.code {
        KeyCode::Char('{') => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::Char('[')
        }
        KeyCode::Char('}') => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::Char(']')
        }
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::CONTROL) && c.is_ascii_uppercase() => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::Char(c.to_ascii_lowercase())
        }
        other => other,
    };

    (code, modifiers)
}

/// The keymap - an ordered collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    /// Create a new keymap from a list of bindings; unparseable patterns are skipped
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed: Vec<_> = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern: {:?}", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// All commands bound to `key`, in table order
    pub fn match_key(&self, key: &KeyEvent) -> Vec<CommandId> {
        let (code, modifiers) = normalize_key(key);
        self.bindings
            .iter()
            .filter(|(_, pattern)| {
                // BackTab comes with or without SHIFT depending on the terminal
                if pattern.code == KeyCode::BackTab {
                    code == KeyCode::BackTab
                } else {
                    pattern.code == code && pattern.modifiers == modifiers
                }
            })
            .map(|(binding, _)| binding.command)
            .collect()
    }

    /// First command bound to `key` within `scope`
    pub fn match_key_in_scope(&self, key: &KeyEvent, scope: CommandScope) -> Option<CommandId> {
        self.match_key(key)
            .into_iter()
            .find(|command| command.scope() == scope)
    }

    /// Get all bindings (for displaying hints)
    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(b, _)| b)
    }

    /// Find the hint for a specific command (returns first match)
    pub fn hint_for_command(&self, command: CommandId) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(b, _)| b.command == command)
            .map(|(b, _)| b.hint.as_str())
    }

    /// Get a compact hint string for a command (e.g., "j/↓" for NavigateNext)
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut unique_hints: Vec<&str> = Vec::new();
        for (binding, _) in &self.bindings {
            if binding.command == command && !unique_hints.contains(&binding.hint.as_str()) {
                unique_hints.push(binding.hint.as_str());
            }
        }

        if unique_hints.is_empty() {
            None
        } else {
            Some(unique_hints.join("/"))
        }
    }
}
