//! Command preview domain types
//!
//! A typed request from the terminal panel is translated into one or more
//! [`CommandIntent`]s. Nothing here executes commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How cautious the translator should be with emitted commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    /// Every intent requires confirmation
    #[default]
    Restricted,
    /// Matched rules may run without confirmation
    Unrestricted,
}

/// Context supplied alongside a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    /// Directory from which commands would run
    pub working_directory: String,
    /// Environment variables the executor would expose
    pub environment: BTreeMap<String, String>,
    /// Whether network access is permitted for the action
    pub allow_network: bool,
}

impl Default for CommandContext {
    fn default() -> Self {
        Self {
            working_directory: "/home".to_string(),
            environment: BTreeMap::new(),
            allow_network: false,
        }
    }
}

/// User input to translate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub text: String,
    pub context: CommandContext,
    pub safety_level: SafetyLevel,
}

impl CommandRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            context: CommandContext::default(),
            safety_level: SafetyLevel::default(),
        }
    }

    pub fn with_safety_level(mut self, safety_level: SafetyLevel) -> Self {
        self.safety_level = safety_level;
        self
    }

    pub fn with_context(mut self, context: CommandContext) -> Self {
        self.context = context;
        self
    }
}

/// A single action the shell would perform
#[derive(Debug, Clone, PartialEq)]
pub struct CommandIntent {
    pub description: String,
    /// argv of the command, program first
    pub command: Vec<String>,
    /// 0.0..=1.0
    pub confidence: f32,
    pub requires_confirmation: bool,
    pub notes: Option<String>,
}

/// Output of a translator
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResult {
    pub intents: Vec<CommandIntent>,
    pub rationale: String,
    /// Name of the model that produced the intents; rule-based output leaves this `None`
    pub used_model: Option<String>,
}

impl TranslationResult {
    /// Highest-confidence intent; the earliest one wins ties
    pub fn primary_intent(&self) -> Option<&CommandIntent> {
        self.intents.iter().fold(None, |best, intent| match best {
            Some(b) if b.confidence >= intent.confidence => Some(b),
            _ => Some(intent),
        })
    }

    /// Command of the highest-confidence intent
    pub fn primary_command(&self) -> Option<&[String]> {
        self.primary_intent().map(|intent| intent.command.as_slice())
    }
}
