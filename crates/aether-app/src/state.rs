//! Application state (Model in TEA pattern)

use aether_core::{CommandRequest, SectionRegistry};
use tracing::info;

use crate::command::{preview_lines, CommandTranslator, RuleBasedTranslator, SandboxPlanner};
use crate::config::Settings;
use crate::view_switcher::ViewSwitcher;

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Navigation keys drive the view switcher
    #[default]
    Browse,

    /// Typing into the terminal panel prompt
    CommandInput,

    /// Quit confirmation dialog
    ConfirmQuit,
}

/// Lifecycle phase of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Section selection and rendered panels
    pub switcher: ViewSwitcher,

    pub ui_mode: UiMode,

    pub phase: AppPhase,

    /// Text typed at the terminal panel prompt
    pub command_input: String,

    pub settings: Settings,

    pub translator: RuleBasedTranslator,

    pub sandbox: SandboxPlanner,
}

impl AppState {
    /// State with default settings and the built-in sections
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// State with the built-in sections, rendered on `overview`
    pub fn with_settings(settings: Settings) -> Self {
        Self::with_parts(
            settings.clone(),
            ViewSwitcher::new(SectionRegistry::builtin()),
            SandboxPlanner::new(settings.sandbox),
        )
    }

    /// State from explicit parts, used where isolation-tool detection must not
    /// depend on the host
    pub fn with_parts(settings: Settings, switcher: ViewSwitcher, sandbox: SandboxPlanner) -> Self {
        let switcher = switcher.with_scrollback(settings.ui.terminal_scrollback);
        let translator = RuleBasedTranslator::with_extra_rules(&settings.translator.commands);

        Self {
            switcher,
            ui_mode: UiMode::default(),
            phase: AppPhase::default(),
            command_input: String::new(),
            settings,
            translator,
            sandbox,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Quit immediately, or show the confirmation dialog when configured
    pub fn request_quit(&mut self) {
        if self.settings.behavior.confirm_quit {
            self.ui_mode = UiMode::ConfirmQuit;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn cancel_quit(&mut self) {
        self.ui_mode = UiMode::Browse;
    }

    pub fn focus_command_input(&mut self) {
        self.ui_mode = UiMode::CommandInput;
    }

    pub fn cancel_command_input(&mut self) {
        self.command_input.clear();
        self.ui_mode = UiMode::Browse;
    }

    /// Translate the prompt text and append the preview to the terminal panel
    ///
    /// Blank input just leaves the prompt.
    pub fn submit_command(&mut self) {
        let text = std::mem::take(&mut self.command_input);
        self.ui_mode = UiMode::Browse;

        if text.trim().is_empty() {
            return;
        }

        let request = CommandRequest::new(text.as_str())
            .with_safety_level(self.settings.translator.safety_level)
            .with_context(self.sandbox.request_context());
        let result = self.translator.translate(&request);
        info!(
            request = %text,
            command = ?result.primary_command(),
            "Translated command request"
        );

        for line in preview_lines(&request, &result, &self.sandbox) {
            self.switcher.append_terminal_line(line);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
