//! Workspace Middleware
//!
//! Bridges the workspace store and the action loop:
//! - on `Bootstrap::Start` subscribes to store changes and forwards every
//!   published snapshot as `SnapshotChanged`, then discovers worktrees
//! - executes `WorkspaceRequest`s one at a time, in dispatch order
//! - turns a confirmed menu selection into a section change

use crate::actions::{
    Action, BootstrapAction, MenuAction, StatusBarAction, WorkspaceAction, WorkspaceRequest,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::workspace::{StoreError, WorkspaceStore};
use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

const SOURCE: &str = "workspace";

type QueuedRequest = (WorkspaceRequest, Dispatcher);

pub struct WorkspaceMiddleware {
    runtime: Handle,
    store: Arc<dyn WorkspaceStore>,
    /// Directory opened as the first workspace when the store is empty
    initial_dir: Option<PathBuf>,
    requests: mpsc::UnboundedSender<QueuedRequest>,
    subscribed: bool,
}

impl WorkspaceMiddleware {
    pub fn new(
        runtime: Handle,
        store: Arc<dyn WorkspaceStore>,
        initial_dir: Option<PathBuf>,
    ) -> Self {
        let (requests, queue) = mpsc::unbounded_channel();
        runtime.spawn(process_requests(Arc::clone(&store), queue));

        Self {
            runtime,
            store,
            initial_dir,
            requests,
            subscribed: false,
        }
    }

    fn enqueue(&self, request: WorkspaceRequest, dispatcher: &Dispatcher) {
        if self.requests.send((request, dispatcher.clone())).is_err() {
            log::error!("Workspace request queue is closed");
        }
    }

    fn bootstrap(&mut self, dispatcher: &Dispatcher) {
        if self.subscribed {
            return;
        }
        self.subscribed = true;

        let mut changes = self.store.subscribe();
        let initial = changes.borrow_and_update().clone();
        let is_empty = initial.workspaces.is_empty();
        dispatcher.dispatch(Action::Workspace(WorkspaceAction::SnapshotChanged(
            Box::new(initial),
        )));

        let forward = dispatcher.clone();
        self.runtime.spawn(async move {
            while changes.changed().await.is_ok() {
                let snapshot = changes.borrow_and_update().clone();
                forward.dispatch(Action::Workspace(WorkspaceAction::SnapshotChanged(
                    Box::new(snapshot),
                )));
            }
            log::debug!("Workspace store closed its change channel");
        });

        self.enqueue(WorkspaceRequest::RefreshWorktrees, dispatcher);

        if is_empty {
            if let Some(dir) = &self.initial_dir {
                let name = dir
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "workspace".to_string());
                self.enqueue(
                    WorkspaceRequest::Create {
                        name,
                        path: Some(dir.clone()),
                    },
                    dispatcher,
                );
            }
        }
    }
}

/// Run queued requests sequentially so mutations land in dispatch order
async fn process_requests(
    store: Arc<dyn WorkspaceStore>,
    mut queue: mpsc::UnboundedReceiver<QueuedRequest>,
) {
    while let Some((request, dispatcher)) = queue.recv().await {
        log::debug!("Workspace request: {:?}", request);
        if let Err(e) = run_request(store.as_ref(), &request).await {
            log::error!("Workspace request {:?} failed: {:#}", request, e);
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                format!("{:#}", e),
                SOURCE,
            )));
        }
    }
}

async fn run_request(store: &dyn WorkspaceStore, request: &WorkspaceRequest) -> anyhow::Result<()> {
    match request {
        WorkspaceRequest::MoveFocus(direction) => {
            let snapshot = store.snapshot();
            let workspace = snapshot
                .active_workspace()
                .ok_or(StoreError::NoActiveWorkspace)?;
            store.move_focused_pane(&workspace.id, *direction).await
        }
        WorkspaceRequest::ToggleZoom => {
            let snapshot = store.snapshot();
            let workspace = snapshot
                .active_workspace()
                .ok_or(StoreError::NoActiveWorkspace)?;
            let pane = workspace
                .focused_index()
                .and_then(|index| workspace.panes.get(index))
                .map(|pane| pane.id)
                .ok_or(StoreError::NoActiveWorkspace)?;
            store.toggle_active_workspace_zoom(pane).await
        }
        WorkspaceRequest::SetPaneCount(count) => {
            store.set_active_workspace_pane_count(*count).await
        }
        WorkspaceRequest::Create { name, path } => {
            let id = store
                .create_workspace(name, path.as_deref())
                .await
                .with_context(|| format!("Failed to create workspace {:?}", name))?;
            log::info!("Created workspace {}", id);
            Ok(())
        }
        WorkspaceRequest::SetActiveSection(section) => store.set_active_section(*section).await,
        WorkspaceRequest::RefreshWorktrees => store
            .refresh_worktrees()
            .await
            .context("Failed to list worktrees"),
    }
}

impl Middleware for WorkspaceMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                self.bootstrap(dispatcher);
                true
            }
            Action::Workspace(WorkspaceAction::Request(request)) => {
                self.enqueue(request.clone(), dispatcher);
                false
            }
            Action::Menu(MenuAction::Confirm) => {
                if let Some(section) = state.menu.selected_section() {
                    self.enqueue(WorkspaceRequest::SetActiveSection(section), dispatcher);
                }
                // The reducer closes the menu
                true
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::testing;
    use crate::workspace::testing::{RecordingStore, StoreCall};
    use crate::workspace::{
        AppSection, Direction, Pane, PaneId, Workspace, WorkspaceId, WorkspaceSnapshot,
    };
    use std::time::{Duration, Instant};
    use tokio::runtime::Runtime;

    fn snapshot() -> WorkspaceSnapshot {
        let id = WorkspaceId("ws-1".to_string());
        WorkspaceSnapshot {
            workspaces: vec![Workspace {
                id: id.clone(),
                name: "api".to_string(),
                worktree_path: None,
                branch: None,
                panes: vec![
                    Pane::new(PaneId(1), "Terminal 1"),
                    Pane::new(PaneId(2), "Terminal 2"),
                ],
                focused_pane: Some(PaneId(2)),
                zoomed_pane: None,
            }],
            active_workspace_id: Some(id),
            ..Default::default()
        }
    }

    fn wait_for_calls(store: &RecordingStore, count: usize) -> Vec<StoreCall> {
        let deadline = Instant::now() + Duration::from_secs(2);
        while store.calls().len() < count && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        store.calls()
    }

    fn request(r: WorkspaceRequest) -> Action {
        Action::Workspace(WorkspaceAction::Request(r))
    }

    #[test]
    fn test_requests_run_in_dispatch_order() {
        let runtime = Runtime::new().unwrap();
        let store = Arc::new(RecordingStore::new(snapshot()));
        let mut mw = WorkspaceMiddleware::new(runtime.handle().clone(), store.clone(), None);
        let (dispatcher, _rx) = testing::dispatcher();
        let state = AppState::default();

        for r in [
            WorkspaceRequest::SetPaneCount(1),
            WorkspaceRequest::SetPaneCount(3),
            WorkspaceRequest::MoveFocus(Direction::Left),
            WorkspaceRequest::ToggleZoom,
        ] {
            assert!(!mw.handle(&request(r), &state, &dispatcher));
        }

        assert_eq!(
            wait_for_calls(&store, 4),
            vec![
                StoreCall::SetPaneCount(1),
                StoreCall::SetPaneCount(3),
                StoreCall::MoveFocusedPane(WorkspaceId("ws-1".to_string()), Direction::Left),
                StoreCall::ToggleZoom(PaneId(2)),
            ]
        );
    }

    #[test]
    fn test_failed_request_reports_error() {
        let runtime = Runtime::new().unwrap();
        let store = Arc::new(RecordingStore::new(WorkspaceSnapshot::default()));
        let mut mw = WorkspaceMiddleware::new(runtime.handle().clone(), store.clone(), None);
        let (dispatcher, rx) = testing::dispatcher();

        mw.handle(
            &request(WorkspaceRequest::ToggleZoom),
            &AppState::default(),
            &dispatcher,
        );

        let actions = testing::collect_until(&rx, |a| matches!(a, Action::StatusBar(_)));
        assert!(matches!(
            actions.as_slice(),
            [Action::StatusBar(StatusBarAction::Push { message, .. })]
                if message == "no active workspace"
        ));
        assert!(store.calls().is_empty());
    }

    #[test]
    fn test_bootstrap_publishes_snapshot_and_creates_first_workspace() {
        let runtime = Runtime::new().unwrap();
        let store = Arc::new(RecordingStore::new(WorkspaceSnapshot::default()));
        let mut mw = WorkspaceMiddleware::new(
            runtime.handle().clone(),
            store.clone(),
            Some(PathBuf::from("/repos/muxdeck")),
        );
        let (dispatcher, rx) = testing::dispatcher();

        let forwarded = mw.handle(
            &Action::Bootstrap(BootstrapAction::Start),
            &AppState::default(),
            &dispatcher,
        );
        assert!(forwarded);
        assert!(matches!(
            testing::drain(&rx).first(),
            Some(Action::Workspace(WorkspaceAction::SnapshotChanged(_)))
        ));
        assert_eq!(
            wait_for_calls(&store, 2),
            vec![
                StoreCall::RefreshWorktrees,
                StoreCall::CreateWorkspace(
                    "muxdeck".to_string(),
                    Some(PathBuf::from("/repos/muxdeck"))
                ),
            ]
        );
    }

    #[test]
    fn test_menu_confirm_sets_section() {
        let runtime = Runtime::new().unwrap();
        let store = Arc::new(RecordingStore::new(snapshot()));
        let mut mw = WorkspaceMiddleware::new(runtime.handle().clone(), store.clone(), None);
        let (dispatcher, _rx) = testing::dispatcher();

        let mut state = AppState::default();
        state.menu.selected_index = 2;
        assert!(mw.handle(&Action::Menu(MenuAction::Confirm), &state, &dispatcher));

        assert_eq!(
            wait_for_calls(&store, 1),
            vec![StoreCall::SetActiveSection(AppSection::Git)]
        );
    }
}
