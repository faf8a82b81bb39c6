//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectSection(key) => {
            state.switcher.select_section(&key);
            UpdateResult::none()
        }

        Message::SelectIndex(index) => {
            state.switcher.select_index(index);
            UpdateResult::none()
        }

        Message::NextSection => {
            state.switcher.select_next();
            UpdateResult::none()
        }

        Message::PreviousSection => {
            state.switcher.select_previous();
            UpdateResult::none()
        }

        Message::FirstSection => {
            state.switcher.select_index(0);
            UpdateResult::none()
        }

        Message::LastSection => {
            let last = state.switcher.registry().len().saturating_sub(1);
            state.switcher.select_index(last);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Command Prompt Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusCommandInput => {
            state.focus_command_input();
            UpdateResult::none()
        }

        Message::CancelCommandInput => {
            state.cancel_command_input();
            UpdateResult::none()
        }

        Message::CommandInput { text } => {
            state.command_input = text;
            UpdateResult::none()
        }

        Message::SubmitCommand => {
            state.submit_command();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Lifecycle Messages
        // ─────────────────────────────────────────────────────────
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.confirm_quit();
            UpdateResult::none()
        }
    }
}
