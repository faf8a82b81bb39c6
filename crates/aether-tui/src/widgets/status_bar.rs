//! Key hint bar shown at the bottom of the screen

use aether_app::UiMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct KeyHints {
    mode: UiMode,
}

impl KeyHints {
    pub fn new(mode: UiMode) -> Self {
        Self { mode }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Browse => &[
                ("↑↓/jk", "navigate"),
                ("1-9", "jump"),
                ("click", "select"),
                (":", "command"),
                ("q", "quit"),
            ],
            UiMode::CommandInput => &[
                ("Enter", "preview"),
                ("Esc", "cancel"),
                ("Ctrl+U", "clear"),
            ],
            UiMode::ConfirmQuit => &[("y", "quit"), ("n", "stay")],
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (index, (key, action)) in self.hints().iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, styles::text_muted()));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);
    }
}
