pub mod command_palette;
pub mod status_bar;

pub use command_palette::{CommandPaletteViewModel, PaletteRow};
pub use status_bar::StatusBarViewModel;
