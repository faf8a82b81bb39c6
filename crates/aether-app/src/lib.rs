//! aether-app - Application state and view switching for the Aether shell preview
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management around the [`ViewSwitcher`], plus configuration loading, the
//! command preview (rule-based translation and sandbox planning) and OS signal
//! handling. It has no terminal dependencies.

pub mod command;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod view_switcher;

// Re-export primary types
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppState, UiMode};
pub use view_switcher::{ContentPanel, NavControl, RenderedView, TerminalPanel, ViewSwitcher};
