//! Custom widget components

mod confirm_dialog;
mod content_panel;
mod header;
mod nav;
mod status_bar;
mod terminal_panel;

pub use confirm_dialog::{centered_rect, ConfirmDialog};
pub use content_panel::ContentView;
pub use header::MainHeader;
pub use nav::NavPanel;
pub use status_bar::KeyHints;
pub use terminal_panel::TerminalView;
