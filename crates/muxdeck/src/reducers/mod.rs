pub mod app_reducer;
pub mod command_palette_reducer;
pub mod crash_reducer;
pub mod menu_reducer;
pub mod new_workspace_reducer;
pub mod status_bar_reducer;

pub use app_reducer::reduce;
