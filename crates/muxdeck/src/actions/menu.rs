//! Overlay menu actions

/// Actions for the section menu overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Show or hide the menu
    Toggle,
    NavigateNext,
    NavigatePrev,
    /// Switch to the highlighted section
    Confirm,
}
