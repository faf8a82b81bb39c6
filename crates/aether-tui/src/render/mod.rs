//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use aether_app::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout::{self, ScreenAreas};
use crate::theme::palette;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`. Returns the areas used for this frame so
/// the event loop can hit-test mouse clicks against what was drawn.
pub fn view(frame: &mut Frame, state: &AppState) -> ScreenAreas {
    let area = frame.area();

    // Wallpaper
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let switcher = &state.switcher;
    let nav_width = layout::nav_width(switcher.nav().iter().map(|c| c.label.as_str()));
    let areas = layout::create(area, nav_width, state.settings.ui.show_key_hints);

    let active_label = switcher
        .nav()
        .iter()
        .find(|control| control.active)
        .map(|control| control.label.as_str());
    frame.render_widget(widgets::MainHeader::new(active_label), areas.header);

    let browsing = state.ui_mode == UiMode::Browse;
    frame.render_widget(
        widgets::NavPanel::new(switcher.nav()).focused(browsing),
        areas.nav,
    );
    frame.render_widget(widgets::ContentView::new(switcher.content()), areas.content);

    let mut terminal = widgets::TerminalView::new(switcher.terminal());
    if state.ui_mode == UiMode::CommandInput {
        terminal = terminal.with_input(&state.command_input);
    }
    frame.render_widget(terminal, areas.terminal);

    if areas.status.height > 0 {
        frame.render_widget(widgets::KeyHints::new(state.ui_mode), areas.status);
    }

    if state.ui_mode == UiMode::ConfirmQuit {
        frame.render_widget(widgets::ConfirmDialog::new(), area);
    }

    areas
}
