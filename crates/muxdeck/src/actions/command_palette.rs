//! Command Palette screen actions
//!
//! Actions specific to the command palette overlay.

/// Actions for the Command Palette screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandPaletteAction {
    /// Open the palette, starting a new session
    Open,

    // Navigation (translated from NavigationAction)
    /// Navigate to next entry in the list
    NavigateNext,
    /// Navigate to previous entry in the list
    NavigatePrev,

    // Text input (translated from TextInputAction)
    /// Character typed into search field
    Char(char),
    /// Backspace pressed in search field
    Backspace,
    /// Clear entire query
    Clear,
    /// Move focus between the query input and the result list
    ToggleFocus,

    /// Close the command palette
    Close,
    /// Execute the selected entry
    Execute,

    // Execution lifecycle (dispatched by the middleware)
    /// An entry started running
    ExecutionStarted { id: String, session: u64 },
    /// An entry settled; `error` is set when it failed
    ExecutionFinished {
        id: String,
        session: u64,
        error: Option<String>,
    },
}
