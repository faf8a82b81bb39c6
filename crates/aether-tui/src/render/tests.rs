//! Full-screen rendering tests for `view`

use super::*;
use crate::test_utils::{create_test_state, create_test_state_with, TestTerminal};
use aether_app::config::Settings;
use aether_app::{process_message, InputKey, Message};
use insta::assert_snapshot;

const WIDTH: u16 = 110;
const HEIGHT: u16 = 30;

fn draw(state: &AppState) -> (TestTerminal, ScreenAreas) {
    let mut term = TestTerminal::with_size(WIDTH, HEIGHT);
    let mut areas = ScreenAreas::default();
    term.draw_with(|frame| areas = view(frame, state));
    (term, areas)
}

fn keys(state: &mut AppState, keys: &[InputKey]) {
    for key in keys {
        process_message(state, Message::Key(key.clone()));
    }
}

#[test]
fn test_initial_screen_shows_overview() {
    let state = create_test_state();
    let (term, _) = draw(&state);

    assert!(term.buffer_contains("AetherOS"));
    assert!(term.buffer_contains("Desktop shell preview"));
    assert!(term.buffer_contains("• Cinnamon-friendly theming with green highlights"));
    assert!(term.buffer_contains("aether@mint ➜ shell status: prototype"));
    assert!(term.buffer_contains("▸ 1 Overview"));
}

#[test]
fn test_switching_replaces_both_panels() {
    let mut state = create_test_state();
    process_message(&mut state, Message::SelectSection("workspace".into()));
    let (term, _) = draw(&state);

    assert!(term.buffer_contains("Workspace layout"));
    assert!(term.buffer_contains("aether@mint ➜ loading workspace canvas"));
    assert!(term.buffer_contains("▸ 2 Workspace"));

    assert!(!term.buffer_contains("Desktop shell preview"));
    assert!(!term.buffer_contains("shell status: prototype"));
    assert!(!term.buffer_contains("▸ 1 Overview"));
}

#[test]
fn test_unknown_section_renders_identically() {
    let mut state = create_test_state();
    process_message(&mut state, Message::SelectSection("settings".into()));
    let (before, _) = draw(&state);

    process_message(&mut state, Message::SelectSection("missing".into()));
    let (after, _) = draw(&state);

    assert_eq!(before.content(), after.content());
}

#[test]
fn test_nav_rows_line_up_with_hit_testing() {
    let state = create_test_state();
    let (term, areas) = draw(&state);

    for (index, control) in state.switcher.nav().iter().enumerate() {
        let row = areas.nav.y + 1 + index as u16;
        assert!(term.line_contains(row, &control.label));
        assert_eq!(
            layout::nav_item_at(areas.nav, areas.nav.x + 2, row, state.switcher.nav().len()),
            Some(index)
        );
    }
}

#[test]
fn test_command_input_row_is_rendered() {
    let mut state = create_test_state();
    keys(
        &mut state,
        &[InputKey::Char(':'), InputKey::Char('d'), InputKey::Char('f')],
    );
    let (term, _) = draw(&state);

    assert!(term.buffer_contains("aether@mint ➜ df█"));
    assert!(term.buffer_contains("Enter preview"));
}

#[test]
fn test_submitted_preview_is_appended_to_terminal() {
    let mut state = create_test_state();
    state.command_input = "list files".to_string();
    state.ui_mode = UiMode::CommandInput;
    process_message(&mut state, Message::SubmitCommand);
    let (term, _) = draw(&state);

    assert!(term.buffer_contains("aether@mint ➜ list files"));
    assert!(term.buffer_contains("plan: ls -la"));
    assert!(term.buffer_contains("limits: isolation=none memory_limit_mb=512"));
    assert!(term.buffer_contains("workspace tiles: loading stubs"));
}

#[test]
fn test_confirm_dialog_overlay() {
    let mut settings = Settings::default();
    settings.behavior.confirm_quit = true;
    let mut state = create_test_state_with(settings);
    process_message(&mut state, Message::RequestQuit);
    let (term, _) = draw(&state);

    assert_eq!(state.ui_mode, UiMode::ConfirmQuit);
    assert!(term.buffer_contains("Leave the Aether shell?"));
}

#[test]
fn test_key_hints_can_be_disabled() {
    let mut settings = Settings::default();
    settings.ui.show_key_hints = false;
    let state = create_test_state_with(settings);
    let (term, areas) = draw(&state);

    assert_eq!(areas.status.height, 0);
    assert!(!term.buffer_contains("navigate"));
}

#[test]
fn test_browse_key_hint_bar() {
    let state = create_test_state();
    let (term, areas) = draw(&state);

    assert_snapshot!(
        term.line(areas.status.y).trim(),
        @"↑↓/jk navigate  1-9 jump  click select  : command  q quit"
    );
}
