//! Terminal event polling

use std::time::Duration;

use aether_app::{InputKey, Message, NavControl, UiMode};
use aether_core::prelude::*;
use crossterm::event::{
    self, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::layout::{self, ScreenAreas};

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None, // Unsupported keys ignored
    }
}

/// Resolve a left click on a navigation row to a section selection.
///
/// Clicks only select while browsing. In any other mode the nav rows sit
/// behind the command prompt or a modal and clicks produce nothing.
pub fn mouse_event_to_message(
    mouse: MouseEvent,
    areas: &ScreenAreas,
    nav: &[NavControl],
    mode: UiMode,
) -> Option<Message> {
    if mode != UiMode::Browse || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let index = layout::nav_item_at(areas.nav, mouse.column, mouse.row, nav.len())?;
    nav.get(index)
        .map(|control| Message::SelectSection(control.key.clone()))
}

/// Poll for terminal events with timeout
///
/// `areas` and `nav` describe the last drawn frame and are used to hit-test
/// mouse clicks. `mode` is the mode that frame was drawn in.
pub fn poll(areas: &ScreenAreas, nav: &[NavControl], mode: UiMode) -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if !event::poll(Duration::from_millis(50))? {
        return Ok(Some(Message::Tick));
    }

    let message = match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => {
            let message = mouse_event_to_message(mouse, areas, nav, mode);
            if let Some(Message::SelectSection(key)) = &message {
                trace!("Nav click at ({}, {}) -> {}", mouse.column, mouse.row, key);
            }
            message
        }
        _ => None,
    };

    Ok(message)
}
