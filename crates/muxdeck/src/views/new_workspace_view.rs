//! New Workspace View
//!
//! A floating form for opening a workspace: a name and an optional worktree
//! path. With a path and no name, the directory name is used.

use crate::actions::{
    Action, ContextAction, NavigationAction, NewWorkspaceAction, TextInputAction,
};
use crate::capabilities::PanelCapabilities;
use crate::state::{AppState, NewWorkspaceField, NewWorkspaceFormState};
use crate::views::{View, ViewId};
use muxdeck_theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct NewWorkspaceView;

impl NewWorkspaceView {
    pub fn new() -> Self {
        Self
    }
}

impl View for NewWorkspaceView {
    fn view_id(&self) -> ViewId {
        ViewId::NewWorkspace
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(&state.new_workspace_form, &state.theme, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next | NavigationAction::NextField => NewWorkspaceAction::NextField,
            NavigationAction::Previous | NavigationAction::PreviousField => {
                NewWorkspaceAction::PrevField
            }
        };
        Some(Action::NewWorkspace(action))
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => NewWorkspaceAction::Char(c),
            TextInputAction::Backspace => NewWorkspaceAction::Backspace,
            TextInputAction::ClearLine => NewWorkspaceAction::Clear,
            TextInputAction::Escape => NewWorkspaceAction::Close,
            TextInputAction::Confirm => NewWorkspaceAction::Confirm,
        };
        Some(Action::NewWorkspace(action))
    }

    fn translate_context_action(&self, action: ContextAction, _state: &AppState) -> Option<Action> {
        match action {
            ContextAction::Confirm => Some(Action::NewWorkspace(NewWorkspaceAction::Confirm)),
        }
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::NewWorkspace(_)
                | Action::ViewContext(_)
                | Action::Navigate(_)
                | Action::TextInput(_)
                | Action::Global(_)
        )
    }
}

fn render(form: &NewWorkspaceFormState, theme: &Theme, area: Rect, f: &mut Frame) {
    let popup_width = (area.width / 10 * 6).clamp(44, 72);
    let popup_area = super::centered_rect(area, popup_width, 11);

    f.render_widget(Clear, popup_area);

    let footer_hint = Line::from(vec![
        Span::styled(" Enter", theme.key_hint().bold()),
        Span::styled(" create  ", theme.muted()),
        Span::styled("Tab", theme.key_hint().bold()),
        Span::styled(" next field  ", theme.muted()),
        Span::styled("Esc", theme.key_hint().bold()),
        Span::styled(" cancel ", theme.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New Workspace ")
        .title_style(theme.panel_title().add_modifier(Modifier::BOLD))
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(theme.panel_border_focused())
        .style(theme.panel_background());
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let [name_area, path_area, _, preview_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    render_field(
        f,
        name_area,
        "Name",
        &form.name,
        "my-feature",
        form.focused_field == NewWorkspaceField::Name,
        theme,
    );
    render_field(
        f,
        path_area,
        "Worktree path (optional)",
        &form.path,
        "/path/to/worktree",
        form.focused_field == NewWorkspaceField::Path,
        theme,
    );

    let preview = if form.is_valid() {
        Line::from(vec![
            Span::styled("Creates ", theme.muted()),
            Span::styled(form.effective_name(), theme.success().bold()),
        ])
    } else {
        Line::from(Span::styled("Enter a name or a path", theme.muted().italic()))
    };
    f.render_widget(Paragraph::new(preview), preview_area);
}

fn render_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    theme: &Theme,
) {
    let border_style = if focused {
        theme.panel_border_focused()
    } else {
        theme.panel_border()
    };

    let content = if value.is_empty() {
        Line::from(Span::styled(placeholder.to_string(), theme.muted().italic()))
    } else if focused {
        Line::from(vec![
            Span::styled(value.to_string(), theme.text()),
            Span::styled("▏", Style::default().fg(theme.accent_primary)),
        ])
    } else {
        Line::from(Span::styled(value.to_string(), theme.text()))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", label))
        .border_style(border_style);
    f.render_widget(Paragraph::new(content).block(block), area);
}
