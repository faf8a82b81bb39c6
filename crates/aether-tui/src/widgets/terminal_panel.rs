//! Floating terminal panel
//!
//! Renders the terminal log of the active section. Prompted lines show the
//! prompt in the accent color followed by the line text; output lines (from
//! the command preview) are rendered without a prompt. When the command input
//! is focused, the last row is an editable prompt with a block cursor.
//!
//! Lines wider than the panel are hard-wrapped, so a long sandbox argv stays
//! readable and the newest rows stay pinned to the bottom.

use aether_app::TerminalPanel;
use aether_core::{TerminalLine, PROMPT};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::{palette, styles};

const CURSOR: &str = "█";

pub struct TerminalView<'a> {
    panel: &'a TerminalPanel,
    input: Option<&'a str>,
}

impl<'a> TerminalView<'a> {
    pub fn new(panel: &'a TerminalPanel) -> Self {
        Self { panel, input: None }
    }

    /// Show the editable prompt row with the current input text
    pub fn with_input(mut self, input: &'a str) -> Self {
        self.input = Some(input);
        self
    }

    fn line(line: &TerminalLine) -> Line<'_> {
        match line.prompt() {
            Some(prompt) => Line::from(vec![
                Span::styled(prompt, styles::prompt()),
                Span::raw(" "),
                Span::styled(line.text(), styles::terminal_text()),
            ]),
            None => Line::from(Span::styled(line.text(), styles::terminal_output())),
        }
    }
}

impl Widget for TerminalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.input.is_some();
        let block = styles::glass_block(focused)
            .title(Span::styled(" terminal ", styles::text_secondary()))
            .style(Style::default().bg(palette::TERMINAL_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines: Vec<Line> = self.panel.lines.iter().map(Self::line).collect();
        if let Some(input) = self.input {
            lines.push(Line::from(vec![
                Span::styled(PROMPT, styles::prompt()),
                Span::raw(" "),
                Span::styled(input, styles::terminal_text()),
                Span::styled(CURSOR, styles::accent()),
            ]));
        }

        let width = usize::from(inner.width);
        let lines: Vec<Line> = lines
            .into_iter()
            .flat_map(|line| wrap_line(line, width))
            .collect();

        // Keep the newest rows visible
        let visible = usize::from(inner.height);
        let skip = lines.len().saturating_sub(visible);
        let lines: Vec<Line> = lines.into_iter().skip(skip).collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Split `line` into rows of at most `width` columns, keeping span styles
fn wrap_line(line: Line<'_>, width: usize) -> Vec<Line<'static>> {
    let mut rows = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut row_width = 0;

    for span in line.spans {
        let mut chunk = String::new();
        for ch in span.content.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if row_width > 0 && row_width + ch_width > width {
                if !chunk.is_empty() {
                    row.push(Span::styled(std::mem::take(&mut chunk), span.style));
                }
                rows.push(Line::from(std::mem::take(&mut row)));
                row_width = 0;
            }
            chunk.push(ch);
            row_width += ch_width;
        }
        if !chunk.is_empty() {
            row.push(Span::styled(chunk, span.style));
        }
    }

    rows.push(Line::from(row));
    rows
}
