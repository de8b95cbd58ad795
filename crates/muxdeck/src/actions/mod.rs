//! Actions module
//!
//! All actions in the application, using a tagged action architecture:
//! - Generic actions (Navigation, TextInput, ViewContext) that views translate to screen-specific actions
//! - Global actions that affect the entire application
//! - Screen- and domain-specific actions that are already targeted

// Shared action types
pub mod context_action;
pub mod global;
pub mod navigation;
pub mod text_input;

// Screen- and domain-specific action types
pub mod bootstrap;
pub mod command_palette;
pub mod crash;
pub mod menu;
pub mod new_workspace;
pub mod status_bar;
pub mod updater;
pub mod workspace;

pub use bootstrap::BootstrapAction;
pub use command_palette::CommandPaletteAction;
pub use context_action::ContextAction;
pub use crash::CrashAction;
pub use global::GlobalAction;
pub use menu::MenuAction;
pub use navigation::NavigationAction;
pub use new_workspace::NewWorkspaceAction;
pub use status_bar::StatusBarAction;
pub use text_input::TextInputAction;
pub use updater::UpdaterAction;
pub use workspace::{WorkspaceAction, WorkspaceRequest};

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone)]
pub enum Action {
    // Generic actions (need translation by active view)
    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),
    /// Context-sensitive action - will be translated by active view
    ViewContext(ContextAction),

    /// Global application actions
    Global(GlobalAction),

    /// Startup actions
    Bootstrap(BootstrapAction),
    /// Command Palette actions
    CommandPalette(CommandPaletteAction),
    /// New workspace modal actions
    NewWorkspace(NewWorkspaceAction),
    /// Section menu actions
    Menu(MenuAction),
    /// Workspace store requests and published snapshots
    Workspace(WorkspaceAction),
    /// Status Bar actions
    StatusBar(StatusBarAction),
    /// Update check actions
    Updater(UpdaterAction),
    /// Crash boundary actions
    Crash(CrashAction),
}
