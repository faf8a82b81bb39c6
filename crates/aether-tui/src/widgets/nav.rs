//! Navigation column listing every section, one row per control.

use aether_app::NavControl;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Navigation panel
///
/// Row `i` of the inner area is control `i`; `layout::nav_item_at` relies on
/// this when mapping mouse clicks back to sections.
pub struct NavPanel<'a> {
    controls: &'a [NavControl],
    focused: bool,
}

impl<'a> NavPanel<'a> {
    pub fn new(controls: &'a [NavControl]) -> Self {
        Self {
            controls,
            focused: true,
        }
    }

    /// Dim the border while another panel owns the keyboard
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn row(index: usize, control: &NavControl) -> Line<'_> {
        let marker = if control.active { "▸ " } else { "  " };
        let shortcut = if index < 9 {
            format!("{} ", index + 1)
        } else {
            "  ".to_string()
        };

        if control.active {
            Line::from(vec![
                Span::raw(marker),
                Span::raw(shortcut),
                Span::raw(control.label.as_str()),
            ])
            .style(styles::focused_selected())
        } else {
            Line::from(vec![
                Span::raw(marker),
                Span::styled(shortcut, styles::keybinding()),
                Span::styled(control.label.as_str(), styles::text_primary()),
            ])
        }
    }
}

impl Widget for NavPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(Span::styled(
            " Sections ",
            styles::text_secondary(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines: Vec<Line> = self
            .controls
            .iter()
            .enumerate()
            .map(|(index, control)| Self::row(index, control))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
