//! New workspace form reducer

use crate::actions::NewWorkspaceAction;
use crate::state::NewWorkspaceFormState;

pub fn reduce_new_workspace(
    mut state: NewWorkspaceFormState,
    action: &NewWorkspaceAction,
) -> NewWorkspaceFormState {
    match action {
        NewWorkspaceAction::Open | NewWorkspaceAction::Close => state.reset(),
        NewWorkspaceAction::Char(c) => state.focused_value_mut().push(*c),
        NewWorkspaceAction::Backspace => {
            state.focused_value_mut().pop();
        }
        NewWorkspaceAction::Clear => state.focused_value_mut().clear(),
        NewWorkspaceAction::NextField => state.focused_field = state.focused_field.next(),
        NewWorkspaceAction::PrevField => state.focused_field = state.focused_field.prev(),
        // The middleware submits the form and closes the modal
        NewWorkspaceAction::Confirm => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NewWorkspaceField;

    fn apply(actions: &[NewWorkspaceAction]) -> NewWorkspaceFormState {
        actions
            .iter()
            .fold(NewWorkspaceFormState::default(), reduce_new_workspace)
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        use NewWorkspaceAction::*;
        let state = apply(&[Char('a'), Char('p'), Char('i'), NextField, Char('/'), Char('x')]);
        assert_eq!(state.name, "api");
        assert_eq!(state.path, "/x");
        assert_eq!(state.focused_field, NewWorkspaceField::Path);
    }

    #[test]
    fn test_backspace_and_clear() {
        use NewWorkspaceAction::*;
        let state = apply(&[Char('a'), Char('b'), Backspace]);
        assert_eq!(state.name, "a");
        let state = reduce_new_workspace(state, &Clear);
        assert!(state.name.is_empty());
    }

    #[test]
    fn test_open_resets_form() {
        use NewWorkspaceAction::*;
        let state = apply(&[Char('a'), NextField, Open]);
        assert!(state.name.is_empty());
        assert_eq!(state.focused_field, NewWorkspaceField::Name);
    }
}
