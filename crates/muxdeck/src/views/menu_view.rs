//! Section menu overlay (F10)

use crate::actions::{Action, ContextAction, MenuAction, NavigationAction};
use crate::capabilities::PanelCapabilities;
use crate::state::{AppState, MenuState};
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct MenuView;

impl MenuView {
    pub fn new() -> Self {
        Self
    }
}

impl View for MenuView {
    fn view_id(&self) -> ViewId {
        ViewId::Menu
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::ITEM_NAVIGATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => MenuAction::NavigateNext,
            NavigationAction::Previous => MenuAction::NavigatePrev,
            NavigationAction::NextField | NavigationAction::PreviousField => return None,
        };
        Some(Action::Menu(action))
    }

    fn translate_context_action(&self, action: ContextAction, _state: &AppState) -> Option<Action> {
        match action {
            ContextAction::Confirm => Some(Action::Menu(MenuAction::Confirm)),
        }
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Menu(_) | Action::ViewContext(_) | Action::Navigate(_) | Action::Global(_)
        )
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let items = MenuState::items();

    let popup = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: 28.min(area.width.saturating_sub(1)),
        height: (items.len() as u16 + 2).min(area.height.saturating_sub(1)),
    };
    f.render_widget(Clear, popup);

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .map(|(idx, section)| {
            let active = *section == state.workspace.active_section;
            let marker = if active { "● " } else { "  " };
            let text = format!("{}{}", marker, section);
            if idx == state.menu.selected_index {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(theme.active_fg)
                        .bg(theme.selected_bg)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(text, theme.text()))
            }
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Menu ")
        .title_style(theme.panel_title().bold())
        .border_style(theme.panel_border_focused())
        .style(theme.panel_background());
    let inner = block.inner(popup).inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    f.render_widget(block, popup);
    f.render_widget(Paragraph::new(lines), inner);
}
