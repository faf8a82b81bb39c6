//! Tests for the update function and key handling

use super::*;
use crate::command::{SandboxConfig, SandboxPlanner};
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::state::{AppState, UiMode};
use crate::view_switcher::ViewSwitcher;

fn test_state() -> AppState {
    let settings = Settings::default();
    let sandbox = SandboxPlanner::with_tool(SandboxConfig::default(), None);
    AppState::with_parts(settings, ViewSwitcher::default(), sandbox)
}

fn active_keys(state: &AppState) -> Vec<String> {
    state
        .switcher
        .nav()
        .iter()
        .filter(|c| c.active)
        .map(|c| c.key.clone())
        .collect()
}

fn key(state: &mut AppState, key: InputKey) {
    let mut msg = Some(Message::Key(key));
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

// ─────────────────────────────────────────────────────────
// Section selection
// ─────────────────────────────────────────────────────────

#[test]
fn test_startup_scenario() {
    let state = test_state();
    let content = state.switcher.content();
    let lines = state.switcher.terminal().display_lines();

    assert_eq!(content.title, "Desktop shell preview");
    assert_eq!(content.bullets.len(), 3);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "aether@mint ➜ shell status: prototype");
    assert_eq!(active_keys(&state), vec!["overview"]);
}

#[test]
fn test_select_workspace_scenario() {
    let mut state = test_state();
    update(&mut state, Message::SelectSection("workspace".to_string()));

    assert_eq!(state.switcher.content().title, "Workspace layout");
    assert_eq!(
        state.switcher.terminal().display_lines()[0],
        "aether@mint ➜ loading workspace canvas"
    );
    assert_eq!(active_keys(&state), vec!["workspace"]);
}

#[test]
fn test_select_settings_twice_scenario() {
    let mut state = test_state();
    update(&mut state, Message::SelectSection("settings".to_string()));
    let once = (
        state.switcher.content().clone(),
        state.switcher.terminal().clone(),
        state.switcher.nav().to_vec(),
    );

    update(&mut state, Message::SelectSection("settings".to_string()));
    let twice = (
        state.switcher.content().clone(),
        state.switcher.terminal().clone(),
        state.switcher.nav().to_vec(),
    );

    assert_eq!(once, twice);
    assert_eq!(active_keys(&state), vec!["settings"]);
}

#[test]
fn test_select_unknown_section_changes_nothing() {
    let mut state = test_state();
    let generation = state.switcher.generation();

    let result = update(&mut state, Message::SelectSection("launchers".to_string()));

    assert_eq!(result, UpdateResult::none());
    assert_eq!(state.switcher.selection(), "overview");
    assert_eq!(state.switcher.generation(), generation);
}

#[test]
fn test_first_and_last_section() {
    let mut state = test_state();
    update(&mut state, Message::LastSection);
    assert_eq!(state.switcher.selection(), "settings");
    update(&mut state, Message::FirstSection);
    assert_eq!(state.switcher.selection(), "overview");
}

// ─────────────────────────────────────────────────────────
// Browse keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_number_keys_select_by_index() {
    let mut state = test_state();
    key(&mut state, InputKey::Char('3'));
    assert_eq!(state.switcher.selection(), "settings");
    key(&mut state, InputKey::Char('1'));
    assert_eq!(state.switcher.selection(), "overview");
}

#[test]
fn test_number_key_out_of_range_is_noop() {
    let mut state = test_state();
    let generation = state.switcher.generation();
    key(&mut state, InputKey::Char('9'));
    assert_eq!(state.switcher.selection(), "overview");
    assert_eq!(state.switcher.generation(), generation);
}

#[test]
fn test_arrow_and_tab_navigation() {
    let mut state = test_state();
    key(&mut state, InputKey::Down);
    assert_eq!(state.switcher.selection(), "workspace");
    key(&mut state, InputKey::Tab);
    assert_eq!(state.switcher.selection(), "settings");
    key(&mut state, InputKey::Tab);
    assert_eq!(state.switcher.selection(), "overview");
    key(&mut state, InputKey::Up);
    assert_eq!(state.switcher.selection(), "settings");
    key(&mut state, InputKey::BackTab);
    assert_eq!(state.switcher.selection(), "workspace");
}

#[test]
fn test_vim_keys() {
    let mut state = test_state();
    key(&mut state, InputKey::Char('G'));
    assert_eq!(state.switcher.selection(), "settings");
    key(&mut state, InputKey::Char('g'));
    assert_eq!(state.switcher.selection(), "overview");
    key(&mut state, InputKey::Char('j'));
    assert_eq!(state.switcher.selection(), "workspace");
    key(&mut state, InputKey::Char('k'));
    assert_eq!(state.switcher.selection(), "overview");
}

#[test]
fn test_q_quits_without_confirmation_by_default() {
    let mut state = test_state();
    key(&mut state, InputKey::Char('q'));
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_from_any_mode() {
    for mode in [UiMode::Browse, UiMode::CommandInput, UiMode::ConfirmQuit] {
        let mut state = test_state();
        state.ui_mode = mode;
        key(&mut state, InputKey::CharCtrl('c'));
        assert!(state.should_quit(), "mode {:?}", mode);
    }
}

#[test]
fn test_confirm_dialog_keys() {
    let mut state = test_state();
    state.settings.behavior.confirm_quit = true;

    key(&mut state, InputKey::Char('q'));
    assert_eq!(state.ui_mode, UiMode::ConfirmQuit);

    key(&mut state, InputKey::Char('n'));
    assert_eq!(state.ui_mode, UiMode::Browse);
    assert!(!state.should_quit());

    key(&mut state, InputKey::Esc);
    key(&mut state, InputKey::Char('y'));
    assert!(state.should_quit());
}

#[test]
fn test_navigation_keys_ignored_in_confirm_dialog() {
    let mut state = test_state();
    state.ui_mode = UiMode::ConfirmQuit;
    assert_eq!(handle_key(&state, InputKey::Down), None);
}

// ─────────────────────────────────────────────────────────
// Command prompt
// ─────────────────────────────────────────────────────────

#[test]
fn test_colon_focuses_prompt() {
    let mut state = test_state();
    key(&mut state, InputKey::Char(':'));
    assert_eq!(state.ui_mode, UiMode::CommandInput);
}

#[test]
fn test_prompt_captures_navigation_characters() {
    let mut state = test_state();
    key(&mut state, InputKey::Char('i'));
    for c in "j2q".chars() {
        key(&mut state, InputKey::Char(c));
    }

    assert_eq!(state.command_input, "j2q");
    assert_eq!(state.switcher.selection(), "overview");
    assert!(!state.should_quit());
}

#[test]
fn test_prompt_backspace_and_clear() {
    let mut state = test_state();
    key(&mut state, InputKey::Char(':'));
    for c in "dfx".chars() {
        key(&mut state, InputKey::Char(c));
    }
    key(&mut state, InputKey::Backspace);
    assert_eq!(state.command_input, "df");

    key(&mut state, InputKey::CharCtrl('u'));
    assert!(state.command_input.is_empty());
}

#[test]
fn test_prompt_escape_discards_text() {
    let mut state = test_state();
    key(&mut state, InputKey::Char(':'));
    key(&mut state, InputKey::Char('x'));
    key(&mut state, InputKey::Esc);

    assert_eq!(state.ui_mode, UiMode::Browse);
    assert!(state.command_input.is_empty());
    assert_eq!(state.switcher.terminal().len(), 3);
}

#[test]
fn test_submit_then_select_replaces_terminal_output() {
    let mut state = test_state();
    update(
        &mut state,
        Message::CommandInput {
            text: "show system info".to_string(),
        },
    );
    update(&mut state, Message::SubmitCommand);
    assert!(state
        .switcher
        .terminal()
        .display_lines()
        .contains(&"plan: uname -a".to_string()));

    update(&mut state, Message::SelectSection("workspace".to_string()));
    assert_eq!(state.switcher.terminal().len(), 3);
    assert!(!state
        .switcher
        .terminal()
        .display_lines()
        .contains(&"plan: uname -a".to_string()));
}

#[test]
fn test_tick_is_noop() {
    let mut state = test_state();
    let generation = state.switcher.generation();
    assert_eq!(update(&mut state, Message::Tick), UpdateResult::none());
    assert_eq!(state.switcher.generation(), generation);
}
