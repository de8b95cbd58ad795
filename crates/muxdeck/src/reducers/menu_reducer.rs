//! Section menu reducer

use crate::actions::MenuAction;
use crate::palette::selection;
use crate::state::MenuState;
use crate::workspace::AppSection;

pub fn reduce_menu(mut state: MenuState, action: &MenuAction, active: AppSection) -> MenuState {
    let items = MenuState::items();
    match action {
        MenuAction::Toggle => {
            // Start on the section that is showing
            state.selected_index = items.iter().position(|s| *s == active).unwrap_or(0);
        }
        MenuAction::NavigateNext => {
            state.selected_index = selection::next(state.selected_index, items.len());
        }
        MenuAction::NavigatePrev => {
            state.selected_index = selection::prev(state.selected_index);
        }
        MenuAction::Confirm => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_selects_active_section() {
        let state = reduce_menu(MenuState::default(), &MenuAction::Toggle, AppSection::Git);
        assert_eq!(state.selected_section(), Some(AppSection::Git));
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = MenuState::default();
        for _ in 0..10 {
            state = reduce_menu(state, &MenuAction::NavigateNext, AppSection::Workspaces);
        }
        assert_eq!(state.selected_section(), Some(AppSection::Settings));
        for _ in 0..10 {
            state = reduce_menu(state, &MenuAction::NavigatePrev, AppSection::Workspaces);
        }
        assert_eq!(state.selected_index, 0);
    }
}
