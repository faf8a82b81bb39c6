//! Screen layout definitions for the TUI
//!
//! Splits the screen into the header, the navigation column, the content
//! window, the floating terminal and an optional one-row key hint bar. Also
//! owns the mapping from a screen cell back to a navigation row, which the
//! mouse handler uses for click-to-select.

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Borders (2) + active marker and space (2) + index digit and space (2) + padding (1)
const NAV_CHROME: u16 = 7;
const NAV_MIN_WIDTH: u16 = 16;
const NAV_MAX_WIDTH: u16 = 32;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title bar (glass container)
    pub header: Rect,

    /// Navigation column with one row per section
    pub nav: Rect,

    /// Content window (title, description, bullets)
    pub content: Rect,

    /// Floating terminal panel
    pub terminal: Rect,

    /// Key hint bar; zero height when hints are disabled
    pub status: Rect,
}

/// Width of the navigation column for the given labels.
pub fn nav_width<'a>(labels: impl IntoIterator<Item = &'a str>) -> u16 {
    let widest = labels
        .into_iter()
        .map(|label| UnicodeWidthStr::width(label) as u16)
        .max()
        .unwrap_or(0);

    widest
        .saturating_add(NAV_CHROME)
        .clamp(NAV_MIN_WIDTH, NAV_MAX_WIDTH)
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `nav_width` - Width of the navigation column (see [`nav_width`])
/// * `show_status` - Whether to reserve a row for key hints
pub fn create(area: Rect, nav_width: u16, show_status: bool) -> ScreenAreas {
    let status_height = if show_status { 1 } else { 0 };

    let rows = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(status_height),
    ])
    .split(area);

    let columns =
        Layout::horizontal([Constraint::Length(nav_width), Constraint::Min(20)]).split(rows[1]);

    let right = Layout::vertical([Constraint::Min(6), Constraint::Percentage(45)]).split(columns[1]);

    ScreenAreas {
        header: rows[0],
        nav: columns[0],
        content: right[0],
        terminal: right[1],
        status: rows[2],
    }
}

/// Map a screen cell to the index of the navigation row under it.
///
/// Rows start on the first line inside the nav border, one control per row.
/// Returns `None` for the border, for blank rows below the last control and
/// for cells outside the column.
pub fn nav_item_at(nav: Rect, column: u16, row: u16, count: usize) -> Option<usize> {
    if nav.width < 3 || nav.height < 3 {
        return None;
    }

    let inner = Rect::new(nav.x + 1, nav.y + 1, nav.width - 2, nav.height - 2);
    let inside_x = column >= inner.x && column < inner.x + inner.width;
    let inside_y = row >= inner.y && row < inner.y + inner.height;
    if !inside_x || !inside_y {
        return None;
    }

    let index = usize::from(row - inner.y);
    (index < count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_with_status() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, 20, true);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 23);
        assert_eq!(layout.nav.width, 20);
        assert_eq!(layout.nav.y, 3);
        assert_eq!(layout.nav.height, 20); // 24 - 3 - 1
    }

    #[test]
    fn test_create_layout_without_status() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, 20, false);

        assert_eq!(layout.status.height, 0);
        assert_eq!(layout.nav.height, 21);
    }

    #[test]
    fn test_right_column_is_contiguous() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = create(area, 18, true);

        assert_eq!(layout.content.x, 18);
        assert_eq!(layout.terminal.x, 18);
        assert_eq!(layout.content.width, 82);
        assert_eq!(layout.content.y + layout.content.height, layout.terminal.y);
        assert_eq!(
            layout.content.height + layout.terminal.height,
            layout.nav.height
        );
    }

    #[test]
    fn test_nav_width_clamps() {
        assert_eq!(nav_width(Vec::<&str>::new()), NAV_MIN_WIDTH);
        assert_eq!(nav_width(["Overview", "Terminal"]), NAV_MIN_WIDTH);
        assert_eq!(nav_width(["A".repeat(12).as_str()]), 19);
        assert_eq!(nav_width(["A".repeat(60).as_str()]), NAV_MAX_WIDTH);
    }

    #[test]
    fn test_nav_item_at_rows() {
        let nav = Rect::new(0, 3, 20, 10);

        // Inner rows start at y = 4
        assert_eq!(nav_item_at(nav, 5, 4, 6), Some(0));
        assert_eq!(nav_item_at(nav, 5, 6, 6), Some(2));
        assert_eq!(nav_item_at(nav, 5, 9, 6), Some(5));
    }

    #[test]
    fn test_nav_item_at_misses() {
        let nav = Rect::new(0, 3, 20, 10);

        // Top border
        assert_eq!(nav_item_at(nav, 5, 3, 6), None);
        // Left and right borders
        assert_eq!(nav_item_at(nav, 0, 4, 6), None);
        assert_eq!(nav_item_at(nav, 19, 4, 6), None);
        // Blank row below the last control
        assert_eq!(nav_item_at(nav, 5, 10, 6), None);
        // Outside the column entirely
        assert_eq!(nav_item_at(nav, 40, 4, 6), None);
    }

    #[test]
    fn test_nav_item_at_degenerate_area() {
        assert_eq!(nav_item_at(Rect::new(0, 0, 2, 2), 1, 1, 6), None);
    }
}
