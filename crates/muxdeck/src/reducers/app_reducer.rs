use crate::actions::{
    Action, CommandPaletteAction, CrashAction, GlobalAction, MenuAction, NewWorkspaceAction,
    WorkspaceAction,
};
use crate::palette::selection;
use crate::reducers::{
    command_palette_reducer, crash_reducer, menu_reducer, new_workspace_reducer,
    status_bar_reducer,
};
use crate::state::AppState;
use crate::views::{CommandPaletteView, MenuView, NewWorkspaceView, ViewId, WorkspaceView};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    // View-stack changes first
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }
        Action::Global(GlobalAction::CloseOverlays) => {
            close_overlays(&mut state);
        }

        Action::CommandPalette(CommandPaletteAction::Open) => {
            close_overlays(&mut state);
            log::debug!("Pushing view onto stack: {:?}", ViewId::CommandPalette);
            state.view_stack.push(Box::new(CommandPaletteView::new()));
        }
        Action::CommandPalette(CommandPaletteAction::Close) => {
            remove_view(&mut state, ViewId::CommandPalette);
        }
        Action::CommandPalette(CommandPaletteAction::ExecutionFinished {
            session,
            error: None,
            ..
        }) if *session == state.command_palette.session => {
            remove_view(&mut state, ViewId::CommandPalette);
        }

        Action::NewWorkspace(NewWorkspaceAction::Open) => {
            if remove_view(&mut state, ViewId::CommandPalette) {
                discard_palette(&mut state);
            }
            if !state.has_view(ViewId::NewWorkspace) {
                log::debug!("Pushing view onto stack: {:?}", ViewId::NewWorkspace);
                state.view_stack.push(Box::new(NewWorkspaceView::new()));
            }
        }
        Action::NewWorkspace(NewWorkspaceAction::Close) => {
            remove_view(&mut state, ViewId::NewWorkspace);
        }

        Action::Menu(MenuAction::Toggle) => {
            if !remove_view(&mut state, ViewId::Menu) {
                state.view_stack.push(Box::new(MenuView::new()));
            }
        }
        Action::Menu(MenuAction::Confirm) => {
            remove_view(&mut state, ViewId::Menu);
        }

        Action::Workspace(WorkspaceAction::SnapshotChanged(snapshot)) => {
            state.workspace = (**snapshot).clone();
            if state.has_view(ViewId::CommandPalette) {
                let len = state.palette_resolution().len();
                state.command_palette.selected_index =
                    selection::clamp(state.command_palette.selected_index, len);
            }
        }

        Action::Crash(CrashAction::Retry | CrashAction::ResetSucceeded) => {
            // Remount from a clean view stack
            state.view_stack = vec![Box::new(WorkspaceView::new())];
            discard_palette(&mut state);
            state.new_workspace_form.reset();
        }
        _ => {}
    }

    // Run sub-reducers for component-specific actions
    match action {
        Action::CommandPalette(a) => {
            state.command_palette = command_palette_reducer::reduce_command_palette(
                state.command_palette,
                a,
                &state.workspace,
                &state.app_config,
            );
        }
        Action::NewWorkspace(a) => {
            state.new_workspace_form =
                new_workspace_reducer::reduce_new_workspace(state.new_workspace_form, a);
        }
        Action::Menu(a) => {
            state.menu = menu_reducer::reduce_menu(state.menu, a, state.workspace.active_section);
        }
        Action::StatusBar(a) => {
            state.status_bar = status_bar_reducer::reduce_status_bar(state.status_bar, a);
        }
        Action::Crash(a) => {
            state.crash = crash_reducer::reduce_crash(state.crash, a);
        }
        _ => {}
    }

    state
}

/// Keep only the base view; an open palette loses its query
fn close_overlays(state: &mut AppState) {
    if state.has_view(ViewId::CommandPalette) {
        discard_palette(state);
    }
    state.view_stack.retain(|view| !view.is_overlay());
    if state.view_stack.is_empty() {
        state.view_stack.push(Box::new(WorkspaceView::new()));
    }
}

/// Remove every view with `id`; returns whether one was removed
fn remove_view(state: &mut AppState, id: ViewId) -> bool {
    let before = state.view_stack.len();
    state.view_stack.retain(|view| view.view_id() != id);
    let removed = state.view_stack.len() != before;
    if removed {
        log::debug!("Closed view: {:?}", id);
    }
    removed
}

fn discard_palette(state: &mut AppState) {
    state.command_palette.query.clear();
    state.command_palette.selected_index = 0;
    state.command_palette.input_focused = true;
}
