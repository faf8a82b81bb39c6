//! Quit confirmation modal
//!
//! Dims the screen behind it, draws a one-cell shadow and centers a small
//! glass dialog asking the user to confirm.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::{palette, styles};

const DIALOG_WIDTH: u16 = 36;
const DIALOG_HEIGHT: u16 = 5;

/// Center a fixed-size rect within an area, clamped to the area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    for y in area.y..area.y.saturating_add(area.height) {
        for x in area.x..area.x.saturating_add(area.width) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let shadow = Style::default().bg(palette::DEEPEST_BG);

    let right_x = modal.x.saturating_add(modal.width);
    for y in modal.y.saturating_add(1)..=modal.y.saturating_add(modal.height) {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow);
        }
    }

    let bottom_y = modal.y.saturating_add(modal.height);
    for x in modal.x.saturating_add(1)..=modal.x.saturating_add(modal.width) {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow);
        }
    }
}

#[derive(Default)]
pub struct ConfirmDialog;

impl ConfirmDialog {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for ConfirmDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        render_shadow(buf, modal);
        Clear.render(modal, buf);

        let block = styles::modal_block(" Quit ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let lines = vec![
            Line::from(Span::styled("Leave the Aether shell?", styles::text_primary())),
            Line::default(),
            Line::from(vec![
                Span::styled("y", styles::keybinding()),
                Span::styled(" quit   ", styles::text_muted()),
                Span::styled("n", styles::keybinding()),
                Span::styled(" stay", styles::text_muted()),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
