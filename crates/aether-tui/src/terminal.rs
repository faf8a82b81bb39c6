//! Terminal setup and restoration

use std::io::stdout;

use aether_core::prelude::*;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Start reporting mouse events (needed for click-to-select)
pub fn enable_mouse_capture() -> Result<()> {
    execute!(stdout(), EnableMouseCapture).map_err(|e| Error::TerminalInit(e.to_string()))
}

pub fn disable_mouse_capture() -> Result<()> {
    execute!(stdout(), DisableMouseCapture).map_err(|e| Error::TerminalRestore(e.to_string()))
}
