//! Section Menu State

use crate::workspace::AppSection;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Default)]
pub struct MenuState {
    pub selected_index: usize,
}

impl MenuState {
    pub fn items() -> Vec<AppSection> {
        AppSection::iter().collect()
    }

    pub fn selected_section(&self) -> Option<AppSection> {
        Self::items().get(self.selected_index).copied()
    }
}
