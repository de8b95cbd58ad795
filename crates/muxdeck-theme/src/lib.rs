//! Color theme for muxdeck views
//!
//! Raw colors are public fields so view models can pre-compute row colors;
//! the style helpers cover the common combinations used by the views.

use ratatui::style::{palette::tailwind, Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub bg_primary: Color,
    pub bg_panel: Color,
    pub bg_tertiary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    pub accent_primary: Color,
    pub active_fg: Color,
    pub active_bg: Color,
    pub selected_bg: Color,

    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c900,
            bg_tertiary: tailwind::SLATE.c800,
            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c300,
            text_muted: tailwind::SLATE.c500,
            accent_primary: tailwind::CYAN.c400,
            active_fg: tailwind::AMBER.c300,
            active_bg: tailwind::SLATE.c700,
            selected_bg: tailwind::SLATE.c700,
            status_success: tailwind::EMERALD.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::AMBER.c400,
            status_info: tailwind::SKY.c400,
        }
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.status_success)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.status_error)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.status_warning)
    }

    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel).fg(self.text_primary)
    }

    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.text_muted).bg(self.bg_panel)
    }

    pub fn panel_border_focused(&self) -> Style {
        Style::default().fg(self.accent_primary).bg(self.bg_panel)
    }

    pub fn panel_title(&self) -> Style {
        Style::default().fg(self.accent_primary).bg(self.bg_panel)
    }

    /// Group header inside lists (e.g. command palette sections)
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.text_secondary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.active_fg)
    }

    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn selection_bg(&self) -> Style {
        Style::default().bg(self.selected_bg)
    }
}
