//! Global actions - not tied to any specific screen
//!
//! These actions affect the application as a whole.

use ratatui::crossterm::event::KeyEvent;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Close every overlay, keeping the base view
    CloseOverlays,
    /// Quit the application
    Quit,
}
