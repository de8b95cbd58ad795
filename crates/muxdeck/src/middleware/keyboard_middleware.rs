//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! ## Layer 1: Priority Keys
//! Ctrl+C quits from anywhere. While the crash screen is shown it owns the
//! keyboard (`r` retry, `x` reset local data, `q` quit).
//!
//! ## Layer 2: Shortcut table
//! [`dispatch_shortcut`] classifies the key. On an editable surface nothing
//! fires and the key is routed to text input instead.
//!
//! ## Layer 3: Keymap + Gating
//! View-scoped bindings (arrows, Tab, Enter) are dispatched only when the
//! active view accepts the resulting action.

use crate::actions::{Action, CrashAction, GlobalAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandScope;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::shortcuts::{dispatch_shortcut, FocusTarget, ShortcutContext, ShortcutOutcome};
use crate::state::{AppState, CrashState};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys
        // ═══════════════════════════════════════════════════════════════════

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        if let Some(crash) = &state.crash {
            handle_crash_key(key, crash, dispatcher);
            return;
        }

        let view = state.active_view();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Shortcut table
        // ═══════════════════════════════════════════════════════════════════

        let ctx = ShortcutContext {
            focus: FocusTarget::from_capabilities(capabilities),
            workspace: &state.workspace,
        };
        match dispatch_shortcut(&key, &state.keymap, &ctx) {
            ShortcutOutcome::Handled(action) => {
                dispatcher.dispatch(action);
                return;
            }
            ShortcutOutcome::PassThrough => {
                route_text_input(key, capabilities, dispatcher);
                return;
            }
            ShortcutOutcome::Unmatched => {}
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 3: Keymap lookup + Gating
        // ═══════════════════════════════════════════════════════════════════

        let Some(view) = view else {
            return;
        };
        for command in state.keymap.match_key(&key) {
            if command.scope() != CommandScope::View {
                continue;
            }
            let action = command.to_action(&state.workspace);
            if view.accepts_action(&action) {
                log::debug!("Layer 3: Command {:?} accepted by view, dispatching", command);
                dispatcher.dispatch(action);
                return;
            }
            log::debug!(
                "Layer 3: Command {:?} rejected by view {:?}",
                command,
                view.view_id()
            );
        }
    }
}

fn handle_crash_key(key: KeyEvent, crash: &CrashState, dispatcher: &Dispatcher) {
    let action = match key.code {
        KeyCode::Char('r') => CrashAction::Retry,
        KeyCode::Char('x') if !crash.resetting => CrashAction::ResetRequested,
        KeyCode::Char('q') => {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }
        _ => return,
    };
    dispatcher.dispatch(Action::Crash(action));
}

/// Keys for an editable surface; the shortcut table never sees them
fn route_text_input(key: KeyEvent, capabilities: PanelCapabilities, dispatcher: &Dispatcher) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let action = match key.code {
        KeyCode::Esc => Action::TextInput(TextInputAction::Escape),
        // Ctrl+U - Unix line kill
        KeyCode::Char('u') if ctrl => Action::TextInput(TextInputAction::ClearLine),
        KeyCode::Char(c) if !ctrl && !alt => Action::TextInput(TextInputAction::Char(c)),
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
            Action::TextInput(TextInputAction::ClearLine)
        }
        KeyCode::Backspace => Action::TextInput(TextInputAction::Backspace),
        KeyCode::Enter => Action::TextInput(TextInputAction::Confirm),
        KeyCode::Down if capabilities.supports_item_navigation() => {
            Action::Navigate(NavigationAction::Next)
        }
        KeyCode::Up if capabilities.supports_item_navigation() => {
            Action::Navigate(NavigationAction::Previous)
        }
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            Action::Navigate(NavigationAction::PreviousField)
        }
        KeyCode::Tab => Action::Navigate(NavigationAction::NextField),
        KeyCode::BackTab => Action::Navigate(NavigationAction::PreviousField),
        _ => {
            log::debug!("Layer 2: key {:?} ignored by text input", key);
            return;
        }
    };
    dispatcher.dispatch(action);
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key(*key, state, dispatcher);
            return false;
        }

        true
    }
}
