//! New Workspace Middleware
//!
//! Turns a confirmed form into a workspace `Create` request and closes the
//! modal. An empty form stays open with a warning.

use crate::actions::{
    Action, NewWorkspaceAction, StatusBarAction, WorkspaceAction, WorkspaceRequest,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct NewWorkspaceMiddleware;

impl NewWorkspaceMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for NewWorkspaceMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if !matches!(action, Action::NewWorkspace(NewWorkspaceAction::Confirm)) {
            return true;
        }

        let form = &state.new_workspace_form;
        if !form.is_valid() {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                "Enter a workspace name or a worktree path",
                "new workspace",
            )));
            return false;
        }

        let name = form.effective_name();
        log::info!("Creating workspace {:?}", name);
        dispatcher.dispatch(Action::Workspace(WorkspaceAction::Request(
            WorkspaceRequest::Create {
                name,
                path: form.worktree_path(),
            },
        )));
        dispatcher.dispatch(Action::NewWorkspace(NewWorkspaceAction::Close));
        false
    }
}
