//! Application State

use crate::keymap::{default_keymap, Keymap};
use crate::palette::{build_catalog, resolve, Resolution};
use crate::views::{View, ViewId, WorkspaceView};
use crate::workspace::WorkspaceSnapshot;

use super::{CommandPaletteState, CrashState, MenuState, NewWorkspaceFormState, StatusBarState};

/// Application state
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are overlays
    /// Views are rendered bottom-up, so the last view in the stack renders on top
    pub view_stack: Vec<Box<dyn View>>,
    /// Latest snapshot published by the workspace store
    pub workspace: WorkspaceSnapshot,
    pub command_palette: CommandPaletteState,
    pub new_workspace_form: NewWorkspaceFormState,
    pub menu: MenuState,
    pub status_bar: StatusBarState,
    /// Present while the crash screen replaces the UI
    pub crash: Option<CrashState>,
    pub theme: muxdeck_theme::Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
    /// Application configuration
    pub app_config: muxdeck_config::AppConfig,
}

impl AppState {
    pub fn new(app_config: muxdeck_config::AppConfig) -> Self {
        Self {
            app_config,
            ..Self::default()
        }
    }

    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|v| v.as_ref())
    }

    pub fn has_view(&self, id: ViewId) -> bool {
        self.view_stack.iter().any(|v| v.view_id() == id)
    }

    /// Visible palette entries for the current query
    pub fn palette_resolution(&self) -> Resolution {
        let catalog = build_catalog(&self.workspace, &self.app_config);
        resolve(&self.command_palette.query, &catalog)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("workspaces", &self.workspace.workspaces.len())
            .field("command_palette", &self.command_palette)
            .field("new_workspace_form", &self.new_workspace_form)
            .field("menu", &self.menu)
            .field("status_bar", &self.status_bar.messages.len())
            .field("crash", &self.crash)
            .field("theme", &"<theme>")
            .field("app_config", &self.app_config)
            .finish()
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            running: self.running,
            view_stack: self.view_stack.clone(),
            workspace: self.workspace.clone(),
            command_palette: self.command_palette.clone(),
            new_workspace_form: self.new_workspace_form.clone(),
            menu: self.menu.clone(),
            status_bar: self.status_bar.clone(),
            crash: self.crash.clone(),
            theme: self.theme.clone(),
            keymap: self.keymap.clone(),
            app_config: self.app_config.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(WorkspaceView::new())],
            workspace: WorkspaceSnapshot::default(),
            command_palette: CommandPaletteState::default(),
            new_workspace_form: NewWorkspaceFormState::default(),
            menu: MenuState::default(),
            status_bar: StatusBarState::default(),
            crash: None,
            theme: muxdeck_theme::Theme::default(),
            keymap: default_keymap(),
            app_config: muxdeck_config::AppConfig::default(),
        }
    }
}
