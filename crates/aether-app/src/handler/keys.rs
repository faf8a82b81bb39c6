//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Browse => handle_key_browse(key),
        UiMode::CommandInput => handle_key_command_input(state, key),
        UiMode::ConfirmQuit => handle_key_confirm_quit(key),
    }
}

/// Handle key events in browse mode
fn handle_key_browse(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),

        // Force quit (bypass confirmation)
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Section Navigation
        // ─────────────────────────────────────────────────────────
        InputKey::Down | InputKey::Char('j') | InputKey::Tab => Some(Message::NextSection),
        InputKey::Up | InputKey::Char('k') | InputKey::BackTab => Some(Message::PreviousSection),
        InputKey::Home | InputKey::Char('g') => Some(Message::FirstSection),
        InputKey::End | InputKey::Char('G') => Some(Message::LastSection),

        // Number keys 1-9 select by position
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Some(Message::SelectIndex(index))
        }

        // ─────────────────────────────────────────────────────────
        // Command Prompt
        // ─────────────────────────────────────────────────────────
        InputKey::Char(':' | 'i') => Some(Message::FocusCommandInput),

        _ => None,
    }
}

/// Handle key events while typing at the prompt
fn handle_key_command_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelCommandInput),
        InputKey::Enter => Some(Message::SubmitCommand),

        InputKey::Backspace => {
            let mut text = state.command_input.clone();
            text.pop();
            Some(Message::CommandInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::CommandInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut text = state.command_input.clone();
            text.push(c);
            Some(Message::CommandInput { text })
        }

        // Force quit even while typing
        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events in the quit confirmation dialog
fn handle_key_confirm_quit(key: InputKey) -> Option<Message> {
    match key {
        // 'q' allows double-tap "qq" as quick quit
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
