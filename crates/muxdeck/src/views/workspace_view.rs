//! Main workspace view
//!
//! The base of the view stack. Shows the section tabs and the active
//! section: the pane grid of the active workspace, the worktree list, the
//! Git control center or the settings page.

use crate::actions::Action;
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandId;
use crate::state::AppState;
use crate::views::{View, ViewId};
use crate::workspace::{
    grid_dimensions, AppSection, GitFocusZone, GitPanel, Pane, Workspace, WorkspaceSnapshot,
    WorktreeManagerIntent,
};
use muxdeck_theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
    Frame,
};
use strum::IntoEnumIterator;

#[derive(Debug, Clone)]
pub struct WorkspaceView;

impl WorkspaceView {
    pub fn new() -> Self {
        Self
    }
}

impl View for WorkspaceView {
    fn view_id(&self) -> ViewId {
        ViewId::Workspace
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    /// Panes record commands instead of hosting a terminal, so nothing here
    /// is editable
    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn is_overlay(&self) -> bool {
        false
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(action, Action::Global(_) | Action::Workspace(_))
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let snapshot = &state.workspace;

    f.render_widget(Block::default().style(theme.panel_background()), area);

    let [tabs_area, content_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let menu_hint = state
        .keymap
        .hint_for_command(CommandId::MenuToggle)
        .unwrap_or("F10");
    SectionTabs {
        active: snapshot.active_section,
        hint: menu_hint,
        theme,
    }
    .render(tabs_area, f.buffer_mut());

    match snapshot.active_section {
        AppSection::Workspaces => render_workspaces(state, content_area, f),
        AppSection::Worktrees => render_worktrees(snapshot, theme, content_area, f),
        AppSection::Git => render_git(snapshot, theme, content_area, f),
        AppSection::Settings => render_settings(state, content_area, f),
    }
}

struct SectionTabs<'a> {
    active: AppSection,
    hint: &'a str,
    theme: &'a Theme,
}

impl Widget for SectionTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(self.theme.bg_tertiary);
        }

        let right = area.x + area.width;
        let mut x = area.x + 1;
        for section in AppSection::iter() {
            let text = format!(" {} ", section);
            let width = text.chars().count() as u16;
            if x + width > right {
                break;
            }
            let style = if section == self.active {
                Style::default()
                    .fg(self.theme.active_fg)
                    .bg(self.theme.active_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                self.theme.muted().bg(self.theme.bg_tertiary)
            };
            buf.set_string(x, area.y, &text, style);
            x += width + 1;
        }

        let hint = format!("{} menu ", self.hint);
        let hint_width = hint.chars().count() as u16;
        if x + hint_width < right {
            buf.set_string(right - hint_width, area.y, &hint, self.theme.key_description());
        }
    }
}

fn render_workspaces(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let snapshot = &state.workspace;

    let [sidebar, grid_area] =
        Layout::horizontal([Constraint::Length(24), Constraint::Min(0)]).areas(area);

    let lines: Vec<Line> = snapshot
        .workspaces
        .iter()
        .map(|ws| {
            let active = snapshot.active_workspace_id.as_ref() == Some(&ws.id);
            let marker = if active { "▸ " } else { "  " };
            let style = if active {
                theme.accent().bold()
            } else {
                theme.text()
            };
            let mut spans = vec![Span::styled(format!("{}{}", marker, ws.name), style)];
            if let Some(branch) = &ws.branch {
                spans.push(Span::styled(format!(" ({})", branch), theme.muted()));
            }
            Line::from(spans)
        })
        .collect();

    let echo = if snapshot.echo_input { "echo on" } else { "echo off" };
    let sidebar_block = Block::default()
        .borders(Borders::ALL)
        .title(" Workspaces ")
        .title_style(theme.panel_title())
        .title_bottom(Line::from(Span::styled(format!(" {} ", echo), theme.muted())))
        .border_style(theme.panel_border());
    f.render_widget(Paragraph::new(lines).block(sidebar_block), sidebar);

    match snapshot.active_workspace() {
        Some(workspace) => render_pane_grid(workspace, theme, grid_area, f),
        None => {
            let hint = state
                .keymap
                .hint_for_command(CommandId::NewWorkspaceOpen)
                .unwrap_or("Ctrl+N");
            f.render_widget(
                Paragraph::new(format!("No workspace open. Press {} to create one.", hint))
                    .style(theme.muted())
                    .alignment(Alignment::Center),
                grid_area,
            );
        }
    }
}

fn render_pane_grid(workspace: &Workspace, theme: &Theme, area: Rect, f: &mut Frame) {
    let focused = workspace.focused_index();

    // A zoomed pane takes the whole grid
    if let Some(index) = workspace
        .zoomed_pane
        .and_then(|id| workspace.pane_index(id))
    {
        render_pane(&workspace.panes[index], true, true, theme, area, f);
        return;
    }

    let (cols, rows) = grid_dimensions(workspace.pane_count());
    if cols == 0 {
        return;
    }

    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);
    for (row, row_area) in row_areas.iter().enumerate() {
        let cells =
            Layout::horizontal(vec![Constraint::Ratio(1, cols as u32); cols]).split(*row_area);
        for (col, cell) in cells.iter().enumerate() {
            let index = row * cols + col;
            if let Some(pane) = workspace.panes.get(index) {
                render_pane(pane, focused == Some(index), false, theme, *cell, f);
            }
        }
    }
}

fn render_pane(pane: &Pane, focused: bool, zoomed: bool, theme: &Theme, area: Rect, f: &mut Frame) {
    let border_style = if focused {
        theme.panel_border_focused()
    } else {
        theme.panel_border()
    };
    let title = if zoomed {
        format!(" {} (zoomed) ", pane.title)
    } else {
        format!(" {} ", pane.title)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(theme.panel_title())
        .border_style(border_style);

    // Show the most recent inputs that fit
    let capacity = area.height.saturating_sub(2) as usize;
    let skip = pane.history.len().saturating_sub(capacity);
    let lines: Vec<Line> = pane
        .history
        .iter()
        .skip(skip)
        .map(|input| {
            if input.executed {
                Line::from(vec![
                    Span::styled("$ ", theme.success()),
                    Span::styled(input.text.as_str(), theme.text()),
                ])
            } else {
                Line::from(Span::styled(input.text.as_str(), theme.muted()))
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_worktrees(snapshot: &WorkspaceSnapshot, theme: &Theme, area: Rect, f: &mut Frame) {
    let mut lines: Vec<Line> = Vec::new();

    if snapshot.worktree_manager == Some(WorktreeManagerIntent::Create) {
        lines.push(Line::from(Span::styled(
            "Create a worktree with `git worktree add <path> <branch>`, then refresh.",
            theme.warning(),
        )));
        lines.push(Line::default());
    }

    if snapshot.worktrees.is_empty() {
        lines.push(Line::from(Span::styled(
            "No worktrees found in the current repository.",
            theme.muted(),
        )));
    }

    for entry in &snapshot.worktrees {
        let open = snapshot.workspace_for_path(&entry.path).is_some();
        let marker = if open { "● " } else { "  " };
        let mut spans = vec![
            Span::styled(marker, theme.success()),
            Span::styled(entry.display_branch(), theme.text().bold()),
            Span::styled(format!("  {}", entry.path.display()), theme.muted()),
        ];
        if let Some(head) = &entry.head {
            let short: String = head.chars().take(8).collect();
            spans.push(Span::styled(format!("  {}", short), theme.text_secondary()));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Worktrees ({}) ", snapshot.worktrees.len()))
        .title_style(theme.panel_title())
        .border_style(theme.panel_border());
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_git(snapshot: &WorkspaceSnapshot, theme: &Theme, area: Rect, f: &mut Frame) {
    let git = snapshot.git;
    let [sidebar, panel] =
        Layout::horizontal([Constraint::Length(18), Constraint::Min(0)]).areas(area);

    let items: Vec<Line> = GitPanel::iter()
        .map(|p| {
            if p == git.active_panel {
                Line::from(Span::styled(format!("▸ {}", p), theme.accent().bold()))
            } else {
                Line::from(Span::styled(format!("  {}", p), theme.text()))
            }
        })
        .collect();

    let focus_style = |zone: GitFocusZone| {
        if git.focus_zone == zone {
            theme.panel_border_focused()
        } else {
            theme.panel_border()
        }
    };

    f.render_widget(
        Paragraph::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Git ")
                .border_style(focus_style(GitFocusZone::Sidebar)),
        ),
        sidebar,
    );

    let body: Vec<Line> = match git.active_panel {
        GitPanel::Status => match snapshot.active_workspace() {
            Some(ws) => vec![
                Line::from(vec![
                    Span::styled("Workspace ", theme.muted()),
                    Span::styled(ws.name.as_str(), theme.text().bold()),
                ]),
                Line::from(vec![
                    Span::styled("Branch    ", theme.muted()),
                    Span::styled(ws.branch.as_deref().unwrap_or("-"), theme.text()),
                ]),
            ],
            None => vec![Line::from(Span::styled("No active workspace", theme.muted()))],
        },
        GitPanel::Branches => snapshot
            .worktrees
            .iter()
            .map(|w| Line::from(Span::styled(w.display_branch(), theme.text())))
            .collect(),
        GitPanel::History => vec![Line::from(Span::styled(
            "History is read from the active worktree",
            theme.muted(),
        ))],
    };

    f.render_widget(
        Paragraph::new(body).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", git.active_panel))
                .border_style(focus_style(GitFocusZone::Panel)),
        ),
        panel,
    );
}

fn render_settings(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let config = &state.app_config;

    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<22}", label), theme.muted()),
            Span::styled(value, theme.text()),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled("Configuration", theme.section_header())),
        row("Quick commands", config.quick_commands.join(", ")),
        row(
            "Pane presets",
            config
                .pane_presets
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        row("Worktree limit", config.worktree_limit.to_string()),
        row("Snapshot limit", config.snapshot_limit.to_string()),
        row("Default pane count", config.default_pane_count.to_string()),
        row("Check for updates", config.check_updates_on_start.to_string()),
        Line::default(),
        Line::from(Span::styled("Key bindings", theme.section_header())),
    ];

    lines.extend(state.keymap.bindings().map(|binding| {
        Line::from(vec![
            Span::styled(format!("{:<22}", binding.hint), theme.key_hint()),
            Span::styled(binding.command.title(), theme.key_description()),
        ])
    }));

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Settings ")
                .border_style(theme.panel_border()),
        ),
        area,
    );
}
