//! Status Bar Widget
//!
//! Renders the status bar at the bottom of the screen.
//! Format: `[timestamp] emoji message                     [source]`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Widget for rendering the status bar
pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 || area.width < 4 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        let right = area.x + area.width;
        let mut x = area.x + 1;

        if !vm.timestamp.is_empty() {
            let ts = format!("[{}] ", vm.timestamp);
            buf.set_stringn(x, area.y, &ts, (right - x) as usize, vm.metadata_style);
            x = x.saturating_add(ts.chars().count() as u16).min(right);
        }

        // Emoji usually renders two cells wide
        buf.set_stringn(x, area.y, vm.emoji, (right - x) as usize, vm.message_style);
        x = x.saturating_add(3).min(right);

        let source = if vm.source.is_empty() {
            String::new()
        } else {
            format!("[{}]", vm.source)
        };
        let source_width = source.chars().count() as u16;
        let available = right.saturating_sub(x + source_width + 2) as usize;

        if vm.message.chars().count() > available {
            let truncated: String = vm.message.chars().take(available.saturating_sub(1)).collect();
            buf.set_stringn(x, area.y, format!("{}…", truncated), available, vm.message_style);
        } else {
            buf.set_stringn(x, area.y, &vm.message, available, vm.message_style);
        }

        if !source.is_empty() && area.width > source_width + 1 {
            let source_x = right - source_width - 1;
            buf.set_string(source_x, area.y, &source, vm.metadata_style);
        }
    }
}
