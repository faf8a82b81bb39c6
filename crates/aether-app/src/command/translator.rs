//! Rule-based translation of typed requests into command intents

use aether_core::{CommandIntent, CommandRequest, SafetyLevel, TranslationResult};
use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};
use tracing::warn;

const RULE_CONFIDENCE: f32 = 0.92;
const FALLBACK_CONFIDENCE: f32 = 0.25;

/// Built-in phrase -> argv rules, checked in this order
pub const DEFAULT_RULES: &[(&str, &[&str])] = &[
    ("open browser", &["xdg-open", "https://linuxmint.com"]),
    ("list files", &["ls", "-la"]),
    ("show system info", &["uname", "-a"]),
    ("update packages", &["sudo", "apt", "update"]),
    ("upgrade packages", &["sudo", "apt", "upgrade", "-y"]),
    ("check disk usage", &["df", "-h"]),
];

/// Converts conversational requests into command intents
pub trait CommandTranslator {
    fn translate(&self, request: &CommandRequest) -> TranslationResult;

    /// Phrases this translator recognizes
    fn supported_verbs(&self) -> Vec<&str> {
        Vec::new()
    }
}

#[derive(Debug, Clone)]
struct CommandRule {
    phrase: String,
    pattern: Regex,
    command: Vec<String>,
}

/// Deterministic translator using curated patterns
///
/// Only emits commands for known phrases. Anything else produces a
/// low-confidence `echo` that always requires confirmation.
#[derive(Debug, Clone)]
pub struct RuleBasedTranslator {
    rules: Vec<CommandRule>,
}

impl RuleBasedTranslator {
    /// Translator with the built-in rules
    pub fn new() -> Self {
        Self::with_rules(DEFAULT_RULES.iter().map(|(phrase, command)| {
            (
                phrase.to_string(),
                command.iter().map(|s| s.to_string()).collect(),
            )
        }))
    }

    /// Translator with exactly the given rules, in order
    ///
    /// Rules with an empty command or a phrase that fails to compile are
    /// skipped with a warning.
    pub fn with_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let rules = rules
            .into_iter()
            .filter_map(|(phrase, command)| {
                if command.is_empty() {
                    warn!("Skipping rule {:?}: empty command", phrase);
                    return None;
                }
                match compile_phrase(&phrase) {
                    Ok(pattern) => Some(CommandRule {
                        phrase,
                        pattern,
                        command,
                    }),
                    Err(e) => {
                        warn!("Skipping rule {:?}: {}", phrase, e);
                        None
                    }
                }
            })
            .collect();
        Self { rules }
    }

    /// Built-in rules merged with extra ones; an extra phrase that matches a
    /// built-in one replaces its command in place. New phrases follow the
    /// built-ins in `extra`'s order.
    pub fn with_extra_rules(extra: &IndexMap<String, Vec<String>>) -> Self {
        let mut rules: Vec<(String, Vec<String>)> = DEFAULT_RULES
            .iter()
            .map(|(phrase, command)| {
                let phrase = phrase.to_string();
                let command = extra
                    .get(&phrase)
                    .cloned()
                    .unwrap_or_else(|| command.iter().map(|s| s.to_string()).collect());
                (phrase, command)
            })
            .collect();

        for (phrase, command) in extra {
            if !rules.iter().any(|(p, _)| p == phrase) {
                rules.push((phrase.clone(), command.clone()));
            }
        }

        Self::with_rules(rules)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl Default for RuleBasedTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandTranslator for RuleBasedTranslator {
    fn translate(&self, request: &CommandRequest) -> TranslationResult {
        let normalized = request.text.trim().to_lowercase();

        let matched = self
            .rules
            .iter()
            .find(|rule| rule.pattern.is_match(&normalized));

        let (intent, rationale_detail) = match matched {
            Some(rule) => (
                CommandIntent {
                    description: format!("Execute `{}` based on recognized phrase", rule.command[0]),
                    command: rule.command.clone(),
                    confidence: RULE_CONFIDENCE,
                    requires_confirmation: request.safety_level != SafetyLevel::Unrestricted,
                    notes: Some("Matched deterministic rule".to_string()),
                },
                format!("Matched pattern: {}", rule.pattern.as_str()),
            ),
            None => (
                CommandIntent {
                    description: "No deterministic rule matched; propose shell echo".to_string(),
                    command: vec!["echo".to_string(), format!("Requested: {}", request.text)],
                    confidence: FALLBACK_CONFIDENCE,
                    requires_confirmation: true,
                    notes: Some("Fallback safeguard for unrecognized input".to_string()),
                },
                "No direct match; emitted safe echo fallback.".to_string(),
            ),
        };

        TranslationResult {
            intents: vec![intent],
            rationale: format!(
                "Used rule-based translator; deterministic patterns preferred. {}",
                rationale_detail
            ),
            used_model: None,
        }
    }

    fn supported_verbs(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.phrase.as_str()).collect()
    }
}

fn compile_phrase(phrase: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(phrase)))
        .case_insensitive(true)
        .build()
}
