//! aether-tui - Terminal UI for the Aether desktop shell preview
//!
//! Renders the [`aether_app::AppState`] with ratatui and converts crossterm
//! key and mouse events into app messages. Mouse clicks on the navigation
//! column are hit-tested against the last drawn frame.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
