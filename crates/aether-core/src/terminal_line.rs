//! Lines shown in the mock terminal panel

use std::fmt;

use serde::Serialize;

/// Fixed prompt prepended to every prompted terminal line
pub const PROMPT: &str = "aether@mint ➜";

/// A single line of the terminal panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TerminalLine {
    /// Rendered as `PROMPT` followed by a space and `text`
    Prompted { text: String },
    /// Plain output with no prompt
    Output { text: String },
}

impl TerminalLine {
    /// Build a prompted line from stored data.
    ///
    /// Stored lines may already carry the prompt; a leading copy is stripped so
    /// the prompt is never shown twice.
    pub fn prompted(line: impl AsRef<str>) -> Self {
        Self::Prompted {
            text: strip_prompt(line.as_ref()).to_string(),
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::Output { text: text.into() }
    }

    /// Prompt literal for this line, if any
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            TerminalLine::Prompted { .. } => Some(PROMPT),
            TerminalLine::Output { .. } => None,
        }
    }

    /// Line text without the prompt
    pub fn text(&self) -> &str {
        match self {
            TerminalLine::Prompted { text } | TerminalLine::Output { text } => text,
        }
    }
}

impl fmt::Display for TerminalLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalLine::Prompted { text } => write!(f, "{PROMPT} {text}"),
            TerminalLine::Output { text } => f.write_str(text),
        }
    }
}

/// Strip a leading `PROMPT ` from a stored line.
///
/// Only a prefix is removed; the prompt text appearing later in the line is
/// kept verbatim.
pub fn strip_prompt(line: &str) -> &str {
    line.strip_prefix(PROMPT)
        .and_then(|rest| rest.strip_prefix(' '))
        .unwrap_or(line)
}
