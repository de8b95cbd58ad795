//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod command_palette;
mod crash;
mod menu;
mod new_workspace;
mod status_bar;

pub use app::AppState;
pub use command_palette::CommandPaletteState;
pub use crash::CrashState;
pub use menu::MenuState;
pub use new_workspace::{NewWorkspaceField, NewWorkspaceFormState};
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
