//! Crash screen
//!
//! Replaces the whole UI after a render panic. Keys are handled by the
//! keyboard middleware: `r` retries, `x` resets local data, `q` quits.

use crate::state::CrashState;
use muxdeck_theme::Theme;
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(crash: &CrashState, theme: &Theme, area: Rect, f: &mut Frame) {
    let popup_area = super::centered_rect(area, (area.width / 10 * 7).max(40), 12);
    f.render_widget(Clear, popup_area);

    let footer = if crash.resetting {
        Line::from(Span::styled(" Resetting local data… ", theme.warning()))
    } else {
        Line::from(vec![
            Span::styled(" r", theme.key_hint().bold()),
            Span::styled(" retry  ", theme.muted()),
            Span::styled("x", theme.key_hint().bold()),
            Span::styled(" reset local data  ", theme.muted()),
            Span::styled("q", theme.key_hint().bold()),
            Span::styled(" quit ", theme.muted()),
        ])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Something went wrong ")
        .title_style(theme.error().add_modifier(Modifier::BOLD))
        .title_bottom(footer)
        .title_alignment(Alignment::Center)
        .border_style(theme.error())
        .style(theme.panel_background());
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let body = vec![
        Line::from(Span::styled(
            "The interface crashed while drawing the last frame.",
            theme.text(),
        )),
        Line::default(),
        Line::from(Span::styled(crash.error.as_str(), theme.error())),
    ];
    f.render_widget(
        Paragraph::new(body)
            .wrap(Wrap { trim: false })
            .style(theme.panel_background()),
        inner,
    );
}
