use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod capabilities;
mod command_id;
mod dispatcher;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod palette;
mod reducers;
mod shortcuts;
mod state;
mod updater;
mod view_models;
mod views;
mod workspace;

use actions::{Action, BootstrapAction, CrashAction, GlobalAction, UpdaterAction};
use background::{spawn_background_worker, SharedState};
use middleware::{
    command_palette_middleware::CommandPaletteMiddleware,
    context_action_middleware::ContextActionMiddleware, crash_middleware::CrashMiddleware,
    keyboard_middleware::KeyboardMiddleware, logging::LoggingMiddleware,
    navigation_middleware::NavigationMiddleware,
    new_workspace_middleware::NewWorkspaceMiddleware,
    text_input_middleware::TextInputMiddleware, updater_middleware::UpdaterMiddleware,
    workspace_middleware::WorkspaceMiddleware, Middleware,
};
use state::AppState;
use updater::{HttpUpdateChecker, UpdateChecker};
use workspace::{GitWorktreeSource, LocalWorkspaceStore};

type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting muxdeck, logging to {}", log_file.display());

    // Stderr would draw over the alternate screen
    std::panic::set_hook(Box::new(|info| {
        log::error!("Panic: {}", info);
    }));

    let runtime = tokio::runtime::Runtime::new()?;
    let app_config = muxdeck_config::AppConfig::load();
    let cwd = std::env::current_dir()?;

    let store = Arc::new(LocalWorkspaceStore::new(
        Arc::new(GitWorktreeSource::new(cwd.clone())),
        app_config.default_pane_count,
    ));
    let checker: Option<Arc<dyn UpdateChecker>> =
        app_config
            .update_endpoint
            .as_ref()
            .and_then(|endpoint| match HttpUpdateChecker::new(endpoint.clone()) {
                Ok(checker) => Some(Arc::new(checker) as Arc<dyn UpdateChecker>),
                Err(e) => {
                    log::warn!("Update checks disabled: {}", e);
                    None
                }
            });
    let check_updates = app_config.check_updates_on_start;

    // Middleware runs in this order
    let handle = runtime.handle().clone();
    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(NavigationMiddleware::new()),
        Box::new(TextInputMiddleware::new()),
        Box::new(ContextActionMiddleware::new()),
        Box::new(CommandPaletteMiddleware::new(
            handle.clone(),
            store.clone(),
            store.clone(),
        )),
        Box::new(NewWorkspaceMiddleware::new()),
        Box::new(WorkspaceMiddleware::new(
            handle.clone(),
            store.clone(),
            Some(cwd),
        )),
        Box::new(UpdaterMiddleware::new(handle.clone(), checker)),
        Box::new(CrashMiddleware::new(handle, store)),
    ];

    let app_state = AppState::new(app_config);
    let shared: SharedState = Arc::new(RwLock::new(app_state.clone()));

    let (action_tx, action_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&shared),
        middleware,
    );

    send(&action_tx, Action::Bootstrap(BootstrapAction::Start));
    if check_updates {
        send(&action_tx, Action::Updater(UpdaterAction::Check));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal, app_state, &shared, &action_tx, &result_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if result.is_err() {
        // The worker only stops on Quit
        send(&action_tx, Action::Global(GlobalAction::Quit));
    }
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }
    runtime.shutdown_timeout(Duration::from_secs(1));

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
        eprintln!("Error: {:#}", err);
    }
    log::info!("Exiting muxdeck");
    result
}

fn send(action_tx: &Sender<Action>, action: Action) {
    if action_tx.send(action).is_err() {
        log::error!("Background worker is gone, dropping action");
    }
}

fn run_app(
    terminal: &mut AppTerminal,
    mut state: AppState,
    shared: &SharedState,
    action_tx: &Sender<Action>,
    result_rx: &Receiver<Action>,
) -> anyhow::Result<()> {
    let mut crash_reported = false;
    loop {
        let mut render_panic = None;
        terminal.draw(|frame| {
            let area = frame.area();
            let rendered = catch_unwind(AssertUnwindSafe(|| views::render(&state, area, frame)));
            if let Err(payload) = rendered {
                render_panic = Some(panic_message(payload.as_ref()));
            }
        })?;
        match render_panic {
            Some(message) if !crash_reported => {
                log::error!("Render failed: {}", message);
                send(action_tx, Action::Crash(CrashAction::Caught(message)));
                crash_reported = true;
            }
            Some(_) => {}
            None => crash_reported = state.crash.is_some(),
        }

        if !state.running {
            break;
        }

        // Apply everything the middleware chain let through
        let mut changed = false;
        for action in result_rx.try_iter() {
            state = reducers::reduce(state, &action);
            changed = true;
        }
        if changed {
            match shared.write() {
                Ok(mut guard) => *guard = state.clone(),
                Err(e) => log::error!("Failed to publish state: {}", e),
            }
            continue;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    send(action_tx, Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
