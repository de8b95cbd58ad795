//! New workspace modal actions

/// Actions for the new-workspace modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewWorkspaceAction {
    /// Show the modal, closing the palette if open
    Open,
    /// Character typed into current field
    Char(char),
    /// Backspace in current field
    Backspace,
    /// Clear current field
    Clear,
    /// Move to next field
    NextField,
    /// Move to previous field
    PrevField,
    /// Create the workspace from the form
    Confirm,
    /// Close the modal without creating
    Close,
}
