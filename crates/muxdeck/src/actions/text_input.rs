//! Text input actions - shared across screens with text input capability
//!
//! Generic text input actions that views translate into their
//! screen-specific actions.

/// Generic text input actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    /// Character typed into input field
    Char(char),
    /// Backspace pressed - remove last character
    Backspace,
    /// Clear entire line (Cmd+Backspace or Ctrl+U)
    ClearLine,
    /// Escape pressed - the view decides whether to cancel or close
    Escape,
    /// Enter pressed - confirm/execute
    Confirm,
}
