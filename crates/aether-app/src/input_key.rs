//! Abstract input key event, independent of terminal library.
//!
//! `aether-app` never sees crossterm types: the TUI converts key events into
//! `InputKey` at its boundary, so the headless entry point and tests can drive
//! the same update loop.

/// Abstract input key event, converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Home,
    End,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    Backspace,
}
