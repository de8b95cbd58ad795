//! Context actions - semantic actions whose meaning depends on the active view

/// Semantic actions translated by the active view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    /// Activate the highlighted item
    Confirm,
}
