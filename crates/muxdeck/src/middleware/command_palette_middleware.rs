//! Command Palette Middleware
//!
//! Executes the highlighted entry when `CommandPalette::Execute` arrives.
//! Runs go through the single-flight [`ExecutionController`] and are spawned
//! onto the tokio runtime; the result comes back as `ExecutionFinished`
//! tagged with the palette session that started it.
//!
//! The middleware keeps its own copy of the palette state, updated from the
//! palette actions as they pass through the chain. The shared state lags
//! behind the reducers, so a fast Enter after typing would otherwise resolve
//! against the previous query.

use crate::actions::{
    Action, CommandPaletteAction, GlobalAction, NewWorkspaceAction, StatusBarAction,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::palette::{build_catalog, resolve, selection, ExecutionContext, ExecutionController};
use crate::reducers::command_palette_reducer::reduce_command_palette;
use crate::state::{AppState, CommandPaletteState};
use crate::workspace::{GitViewStore, WorkspaceStore};
use std::sync::Arc;
use tokio::runtime::Handle;

const SOURCE: &str = "palette";

pub struct CommandPaletteMiddleware {
    runtime: Handle,
    store: Arc<dyn WorkspaceStore>,
    git: Arc<dyn GitViewStore>,
    controller: ExecutionController,
    palette: CommandPaletteState,
}

impl CommandPaletteMiddleware {
    pub fn new(
        runtime: Handle,
        store: Arc<dyn WorkspaceStore>,
        git: Arc<dyn GitViewStore>,
    ) -> Self {
        Self {
            runtime,
            store,
            git,
            controller: ExecutionController::new(),
            palette: CommandPaletteState::default(),
        }
    }

    fn context(&self, dispatcher: &Dispatcher) -> ExecutionContext {
        let modal_dispatcher = dispatcher.clone();
        ExecutionContext {
            store: Arc::clone(&self.store),
            git: Arc::clone(&self.git),
            open_workspace_modal: Arc::new(move || {
                modal_dispatcher.dispatch(Action::NewWorkspace(NewWorkspaceAction::Open))
            }),
        }
    }

    fn track(&mut self, action: &CommandPaletteAction, state: &AppState) {
        self.palette = reduce_command_palette(
            std::mem::take(&mut self.palette),
            action,
            &state.workspace,
            &state.app_config,
        );
    }

    fn execute(&self, state: &AppState, dispatcher: &Dispatcher) {
        let catalog = build_catalog(&state.workspace, &state.app_config);
        let resolution = resolve(&self.palette.query, &catalog);
        // The catalog may have shrunk since the selection moved
        let index = selection::clamp(self.palette.selected_index, resolution.len());
        let Some(entry) = resolution.entries.get(index) else {
            log::debug!("Command palette: nothing to execute");
            return;
        };

        let session = self.palette.session;
        let execution = match self.controller.begin(entry, session) {
            Ok(execution) => execution,
            Err(refused) => {
                log::warn!("Command palette: refused {}: {}", entry.id, refused);
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                    format!("{}, try again when it finishes", refused),
                    SOURCE,
                )));
                return;
            }
        };

        dispatcher.dispatch(Action::CommandPalette(
            CommandPaletteAction::ExecutionStarted {
                id: execution.id().to_string(),
                session: execution.session(),
            },
        ));

        let ctx = self.context(dispatcher);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let report = execution.run(&ctx).await;
            if let Err(message) = &report.outcome {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    format!("{} failed: {}", report.label, message),
                    SOURCE,
                )));
            }
            dispatcher.dispatch(Action::CommandPalette(
                CommandPaletteAction::ExecutionFinished {
                    id: report.id,
                    session: report.session,
                    error: report.outcome.err(),
                },
            ));
        });
    }
}

impl Middleware for CommandPaletteMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::CommandPalette(CommandPaletteAction::Execute) => {
                self.execute(state, dispatcher);
                return false;
            }
            Action::CommandPalette(palette_action) => self.track(palette_action, state),
            // Both discard an open palette's query
            Action::Global(GlobalAction::CloseOverlays)
            | Action::NewWorkspace(NewWorkspaceAction::Open) => {
                self.track(&CommandPaletteAction::Close, state)
            }
            _ => {}
        }

        true
    }
}
