//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event from the poll timeout
    Tick,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Select a section by key (unknown keys are ignored)
    SelectSection(String),
    /// Select a section by navigation index
    SelectIndex(usize),
    NextSection,
    PreviousSection,
    FirstSection,
    LastSection,

    // ─────────────────────────────────────────────────────────
    // Command Prompt Messages
    // ─────────────────────────────────────────────────────────
    /// Focus the terminal panel prompt
    FocusCommandInput,
    /// Leave the prompt, discarding its text
    CancelCommandInput,
    /// Replace the prompt text
    CommandInput { text: String },
    /// Translate the prompt text and print the preview
    SubmitCommand,

    // ─────────────────────────────────────────────────────────
    // Lifecycle Messages
    // ─────────────────────────────────────────────────────────
    /// Request to quit (may show confirmation dialog)
    RequestQuit,
    /// Confirm quit from confirmation dialog
    ConfirmQuit,
    /// Cancel quit from confirmation dialog
    CancelQuit,
    /// Force quit without confirmation (Ctrl+C, signal handler)
    Quit,
}
