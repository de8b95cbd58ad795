pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
///
/// Shortcut-scoped bindings are listed in priority order; the shortcut
/// dispatcher takes the first match.
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Panes
        KeyBinding::new("ctrl+alt+left", "Ctrl+Alt+←", FocusPaneLeft),
        KeyBinding::new("ctrl+alt+right", "Ctrl+Alt+→", FocusPaneRight),
        KeyBinding::new("ctrl+alt+up", "Ctrl+Alt+↑", FocusPaneUp),
        KeyBinding::new("ctrl+alt+down", "Ctrl+Alt+↓", FocusPaneDown),
        KeyBinding::new("ctrl+alt+enter", "Ctrl+Alt+Enter", ToggleZoom),
        KeyBinding::new("ctrl+shift+[", "Ctrl+Shift+[", PaneCountDecrease),
        KeyBinding::new("ctrl+shift+]", "Ctrl+Shift+]", PaneCountIncrease),
        // Overlays
        KeyBinding::new("ctrl+n", "Ctrl+N", NewWorkspaceOpen),
        KeyBinding::new("ctrl+p", "Ctrl+P", CommandPaletteOpen),
        KeyBinding::new("esc", "Esc", CloseOverlays),
        // Application
        KeyBinding::new("f10", "F10", MenuToggle),
        KeyBinding::new("ctrl+q", "Ctrl+Q", Quit),
        // Navigation (view-local)
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("tab", "Tab", NavigateNextField),
        KeyBinding::new("shift+tab", "Shift+Tab", NavigatePreviousField),
        KeyBinding::new("backtab", "Shift+Tab", NavigatePreviousField),
        KeyBinding::new("enter", "Enter", Confirm),
    ];

    Keymap::new(bindings)
}
