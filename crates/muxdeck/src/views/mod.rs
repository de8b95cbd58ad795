use crate::actions::{Action, ContextAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::StatusBarViewModel;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

pub mod command_palette_view;
pub mod crash_view;
pub mod menu_view;
pub mod new_workspace_view;
pub mod status_bar;
pub mod workspace_view;

pub use command_palette_view::CommandPaletteView;
pub use menu_view::MenuView;
pub use new_workspace_view::NewWorkspaceView;
pub use workspace_view::WorkspaceView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Workspace,
    CommandPalette,
    NewWorkspace,
    Menu,
}

/// View trait - defines the interface that all views must implement
///
/// Views live on the view stack as trait objects (`Box<dyn View>`), so the
/// trait must stay object-safe and `Send` (the stack is shared with the
/// background worker).
pub trait View: std::fmt::Debug + Send + Sync {
    fn view_id(&self) -> ViewId;

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Get the capabilities of this view (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone this view into a Box
    /// This is needed because Clone requires Sized, so we provide a manual clone method
    fn clone_box(&self) -> Box<dyn View>;

    /// Overlays are removed by `CloseOverlays`; the base view is not
    fn is_overlay(&self) -> bool {
        true
    }

    /// Translate a generic navigation action to this view's specific action.
    ///
    /// The default implementation returns None, indicating the view doesn't
    /// handle navigation.
    fn translate_navigation(&self, _nav: NavigationAction) -> Option<Action> {
        None
    }

    /// Translate a generic text input action to this view's specific action.
    fn translate_text_input(&self, _input: TextInputAction) -> Option<Action> {
        None
    }

    /// Translate a context action (e.g. Enter) to this view's specific action.
    fn translate_context_action(&self, _action: ContextAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Gating for view-scoped keymap commands
    fn accepts_action(&self, action: &Action) -> bool;
}

/// Implement Clone for Box<dyn View>
impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI
///
/// Views are rendered bottom-up so overlays draw last. The crash screen
/// replaces the view stack while present; the status bar is always shown.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let [main, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    if let Some(crash) = &state.crash {
        crash_view::render(crash, &state.theme, main, f);
    } else {
        for view in &state.view_stack {
            view.render(state, main, f);
        }
    }

    let vm = StatusBarViewModel::from_state(state);
    f.render_widget(status_bar::StatusBarWidget(&vm), status);
}

/// Centered popup area inside `area`
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
