//! Configuration types for `~/.aetheros/config.toml`

use aether_core::SafetyLevel;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::command::SandboxConfig;
use crate::view_switcher::DEFAULT_SCROLLBACK;

/// Root settings structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub translator: TranslatorSettings,

    #[serde(default)]
    pub sandbox: SandboxConfig,
}

/// Behavior settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting
    #[serde(default)]
    pub confirm_quit: bool,
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the key hint bar at the bottom of the screen
    #[serde(default = "default_true")]
    pub show_key_hints: bool,

    /// Maximum number of lines kept in the terminal panel
    #[serde(default = "default_terminal_scrollback")]
    pub terminal_scrollback: usize,

    /// Capture mouse clicks for navigation
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_key_hints: true,
            terminal_scrollback: default_terminal_scrollback(),
            mouse: true,
        }
    }
}

/// Command translator settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TranslatorSettings {
    #[serde(default)]
    pub safety_level: SafetyLevel,

    /// Extra phrase -> argv rules, merged over the built-in ones. Kept in
    /// file order; earlier rules win when several phrases match.
    #[serde(default)]
    pub commands: IndexMap<String, Vec<String>>,
}

fn default_true() -> bool {
    true
}

fn default_terminal_scrollback() -> usize {
    DEFAULT_SCROLLBACK
}
