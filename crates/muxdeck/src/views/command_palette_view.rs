use crate::actions::{
    Action, CommandPaletteAction, ContextAction, NavigationAction, TextInputAction,
};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::{CommandPaletteViewModel, PaletteRow};
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Command palette view - searchable action launcher
///
/// The query input and the result list take turns holding focus (Tab).
/// Only the input is an editable surface; with the list focused global
/// shortcuts fire over the palette.
#[derive(Debug, Clone)]
pub struct CommandPaletteView;

impl CommandPaletteView {
    pub fn new() -> Self {
        Self
    }
}

impl View for CommandPaletteView {
    fn view_id(&self) -> ViewId {
        ViewId::CommandPalette
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, state: &AppState) -> PanelCapabilities {
        if state.command_palette.input_focused {
            PanelCapabilities::TEXT_INPUT | PanelCapabilities::ITEM_NAVIGATION
        } else {
            PanelCapabilities::ITEM_NAVIGATION
        }
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => CommandPaletteAction::NavigateNext,
            NavigationAction::Previous => CommandPaletteAction::NavigatePrev,
            NavigationAction::NextField | NavigationAction::PreviousField => {
                CommandPaletteAction::ToggleFocus
            }
        };
        Some(Action::CommandPalette(action))
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => CommandPaletteAction::Char(c),
            TextInputAction::Backspace => CommandPaletteAction::Backspace,
            TextInputAction::ClearLine => CommandPaletteAction::Clear,
            TextInputAction::Escape => CommandPaletteAction::Close,
            TextInputAction::Confirm => CommandPaletteAction::Execute,
        };
        Some(Action::CommandPalette(action))
    }

    fn translate_context_action(&self, action: ContextAction, _state: &AppState) -> Option<Action> {
        match action {
            ContextAction::Confirm => Some(Action::CommandPalette(CommandPaletteAction::Execute)),
        }
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::CommandPalette(_)
                | Action::ViewContext(_)
                | Action::Navigate(_)
                | Action::TextInput(_)
                | Action::Global(_)
        )
    }
}

/// Render the command palette as a centered floating panel
fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = CommandPaletteViewModel::from_state(state);

    let popup_width = (area.width / 10 * 7).min(100);
    let popup_height = (area.height / 10 * 7).min(32);
    let popup_area = super::centered_rect(area, popup_width, popup_height);

    f.render_widget(Clear, popup_area);

    let footer_hint = Line::from(vec![
        Span::styled(" Enter", theme.key_hint().bold()),
        Span::styled(" run  ", theme.muted()),
        Span::styled(
            format!(
                "{}/{}",
                vm.footer_hints.navigate_up, vm.footer_hints.navigate_down
            ),
            theme.key_hint().bold(),
        ),
        Span::styled(" navigate  ", theme.muted()),
        Span::styled(&vm.footer_hints.switch_focus, theme.key_hint().bold()),
        Span::styled(" focus  ", theme.muted()),
        Span::styled(&vm.footer_hints.close, theme.key_hint().bold()),
        Span::styled(" close ", theme.muted()),
    ]);

    let title = format!(" Command Palette ({}) ", vm.total_entries);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(theme.panel_title().add_modifier(Modifier::BOLD))
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(theme.panel_border().add_modifier(Modifier::BOLD))
        .style(theme.panel_background());
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let [input_area, list_area, details_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(inner);

    // Input box
    let input_text = if vm.input_is_empty {
        Line::from(Span::styled(
            "Search actions, or > to run a command...",
            theme.muted().italic(),
        ))
    } else if vm.input_focused {
        Line::from(vec![
            Span::styled(&vm.input_text, theme.text()),
            Span::styled("▏", Style::default().fg(theme.accent_primary)),
        ])
    } else {
        Line::from(Span::styled(&vm.input_text, theme.text()))
    };
    let input_border = if vm.input_focused {
        theme.panel_border_focused()
    } else {
        theme.panel_border()
    };
    f.render_widget(
        Paragraph::new(input_text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(input_border),
        ),
        input_area,
    );

    // Results
    if let Some(message) = vm.empty_message {
        f.render_widget(
            Paragraph::new(message)
                .style(theme.muted())
                .alignment(Alignment::Center),
            list_area,
        );
    } else {
        let visible = list_area.height as usize;
        // Keep the highlighted row on screen
        let offset = vm
            .selected_row
            .map(|row| (row + 1).saturating_sub(visible))
            .unwrap_or(0);

        let lines: Vec<Line> = vm
            .rows
            .iter()
            .skip(offset)
            .take(visible)
            .map(|row| match row {
                PaletteRow::Header(title) => {
                    Line::from(Span::styled(title.as_str(), theme.section_header()))
                }
                PaletteRow::Entry(entry) => {
                    let mut style = Style::default().fg(entry.fg_color).bg(entry.bg_color);
                    if entry.is_selected {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    if entry.is_running {
                        style = style.add_modifier(Modifier::ITALIC);
                    }
                    Line::from(Span::styled(
                        format!("{}{}", entry.indicator, entry.label),
                        style,
                    ))
                }
            })
            .collect();

        f.render_widget(Paragraph::new(lines).style(theme.panel_background()), list_area);
    }

    if let Some(description) = &vm.selected_description {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                description.as_str(),
                theme.text_secondary(),
            )))
            .wrap(Wrap { trim: false }),
            details_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_follow_input_focus() {
        let mut state = AppState::default();
        let view = CommandPaletteView::new();
        assert!(view.capabilities(&state).accepts_text_input());

        state.command_palette.input_focused = false;
        let caps = view.capabilities(&state);
        assert!(!caps.accepts_text_input());
        assert!(caps.supports_item_navigation());
    }

    #[test]
    fn test_tab_toggles_focus() {
        let view = CommandPaletteView::new();
        assert!(matches!(
            view.translate_navigation(NavigationAction::NextField),
            Some(Action::CommandPalette(CommandPaletteAction::ToggleFocus))
        ));
    }
}
