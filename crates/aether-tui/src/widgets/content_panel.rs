//! Content window: heading, descriptive paragraph and bullet list.

use aether_app::ContentPanel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub struct ContentView<'a> {
    panel: &'a ContentPanel,
}

impl<'a> ContentView<'a> {
    pub fn new(panel: &'a ContentPanel) -> Self {
        Self { panel }
    }
}

impl Widget for ContentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![
            Line::from(Span::styled(
                self.panel.title.as_str(),
                styles::accent_bold(),
            )),
            Line::default(),
            Line::from(Span::styled(
                self.panel.description.as_str(),
                styles::text_primary(),
            )),
        ];

        if !self.panel.bullets.is_empty() {
            lines.push(Line::default());
            lines.extend(self.panel.bullets.iter().map(|bullet| {
                Line::from(vec![
                    Span::styled("• ", styles::accent()),
                    Span::styled(bullet.as_str(), styles::text_secondary()),
                ])
            }));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
