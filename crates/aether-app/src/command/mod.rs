//! Command preview: translate a typed request and show its sandbox plan
//!
//! - `translator`: rule-based phrase matching into [`aether_core::CommandIntent`]s
//! - `sandbox`: isolation-tool argv planning under configured limits

pub mod sandbox;
pub mod translator;

pub use sandbox::{IsolationTool, SandboxConfig, SandboxPlanner};
pub use translator::{CommandTranslator, RuleBasedTranslator, DEFAULT_RULES};

use aether_core::{CommandRequest, TerminalLine, TranslationResult};

/// `describe()` keys shown on the `limits:` line
const LIMIT_KEYS: [&str; 3] = ["isolation", "memory_limit_mb", "cpu_shares"];

/// Terminal panel lines describing a translation and its sandbox plan
///
/// The request itself is echoed as a prompted line, everything else is plain
/// output. Limits are only listed for commands the planner accepts.
pub fn preview_lines(
    request: &CommandRequest,
    result: &TranslationResult,
    planner: &SandboxPlanner,
) -> Vec<TerminalLine> {
    let mut lines = vec![TerminalLine::prompted(&request.text)];

    let Some(intent) = result.primary_intent() else {
        lines.push(TerminalLine::output("no intent produced"));
        return lines;
    };

    lines.push(TerminalLine::output(format!(
        "intent: {} (confidence {:.2})",
        intent.description, intent.confidence
    )));
    lines.push(TerminalLine::output(format!(
        "plan: {}",
        intent.command.join(" ")
    )));

    lines.push(TerminalLine::output(format!(
        "context: cwd={} network={}",
        request.context.working_directory,
        if request.context.allow_network {
            "enabled"
        } else {
            "disabled"
        }
    )));

    match planner.build_command(&intent.command) {
        Ok(argv) => {
            lines.push(TerminalLine::output(format!("sandbox: {}", argv.join(" "))));
            let limits = planner.describe();
            let limits: Vec<String> = LIMIT_KEYS
                .iter()
                .filter_map(|key| limits.get(key).map(|value| format!("{}={}", key, value)))
                .collect();
            lines.push(TerminalLine::output(format!("limits: {}", limits.join(" "))));
        }
        Err(e) => lines.push(TerminalLine::output(format!("blocked: {}", e))),
    }

    if intent.requires_confirmation {
        lines.push(TerminalLine::output("confirm: required before execution"));
    }

    lines
}
