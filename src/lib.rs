//! Aether shell library
//!
//! Ties the workspace crates together for the `aether` binary: the
//! interactive TUI from `aether-tui` and the JSON headless mode.

pub mod headless;

// Re-export main entry point
pub use aether_tui::run;
