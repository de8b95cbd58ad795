//! Navigation actions - shared across multiple screens
//!
//! Generic navigation actions that views translate into their
//! screen-specific actions.

/// Generic navigation actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Navigate to next item (down arrow, j)
    Next,
    /// Navigate to previous item (up arrow, k)
    Previous,
    /// Move focus to the next field or zone (Tab)
    NextField,
    /// Move focus to the previous field or zone (Shift+Tab)
    PreviousField,
}
