//! Header bar widget
//!
//! Shows the shell title on the left and the active section on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

const TITLE: &str = "✦ AetherOS";
const SUBTITLE: &str = "desktop shell preview";

/// Main header showing the shell title and the active section label
pub struct MainHeader<'a> {
    section_label: Option<&'a str>,
}

impl<'a> MainHeader<'a> {
    pub fn new(section_label: Option<&'a str>) -> Self {
        Self { section_label }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(TITLE, styles::accent_bold()),
            Span::styled(" │ ", styles::text_muted()),
            Span::styled(SUBTITLE, styles::text_secondary()),
        ]);
        Paragraph::new(title).render(Rect { height: 1, ..inner }, buf);

        let Some(label) = self.section_label else {
            return;
        };

        // Right-aligned section label, dropped when it would overlap the title
        let label_width = UnicodeWidthStr::width(label) as u16 + 1;
        let title_width = UnicodeWidthStr::width(TITLE) as u16
            + UnicodeWidthStr::width(SUBTITLE) as u16
            + 5;
        if title_width + label_width > inner.width {
            return;
        }

        let label_area = Rect {
            x: inner.x + inner.width - label_width,
            y: inner.y,
            width: label_width,
            height: 1,
        };
        Paragraph::new(Line::from(vec![
            Span::styled(label, styles::text_primary()),
            Span::raw(" "),
        ]))
        .render(label_area, buf);
    }
}
