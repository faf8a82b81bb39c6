//! Headless mode - JSON output instead of the TUI
//!
//! Prints the rendered view switcher state as NDJSON (one event per line),
//! so scripts can inspect what the shell would show without parsing ANSI
//! output.
//!
//! ```json
//! {"event":"ready","sections":["overview","workspace","settings"],"timestamp":1704700001000}
//! {"event":"view","selection":"overview","generation":1,"nav":[...],"content":{...},"terminal":[...],"timestamp":1704700001000}
//! ```

use std::io::{self, Write};

use aether_app::config::Settings;
use aether_app::{AppState, RenderedView};
use aether_core::prelude::*;
use chrono::Utc;
use serde::Serialize;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent<'a> {
    /// Registered section keys, in navigation order
    Ready {
        sections: Vec<&'a str>,
        timestamp: i64,
    },

    /// Everything the two output regions currently show
    View {
        #[serde(flatten)]
        view: RenderedView<'a>,
        timestamp: i64,
    },
}

impl<'a> HeadlessEvent<'a> {
    pub fn ready(state: &'a AppState) -> Self {
        Self::Ready {
            sections: state.switcher.registry().keys().collect(),
            timestamp: Self::now(),
        }
    }

    pub fn view(state: &'a AppState) -> Self {
        Self::View {
            view: state.switcher.rendered(),
            timestamp: Self::now(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match self.to_json() {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Build the state a headless run reports on
///
/// `section` is selected after the default; an unknown key keeps the default.
pub fn build_state(settings: Settings, section: Option<&str>) -> AppState {
    let mut state = AppState::with_settings(settings);
    if let Some(key) = section {
        if !state.switcher.select_section(key) {
            debug!("Ignoring unknown section '{}'", key);
        }
    }
    state
}

/// Print the ready and view events for the given settings
pub fn run(settings: Settings, section: Option<&str>) -> Result<()> {
    let state = build_state(settings, section);
    info!("Headless snapshot of '{}'", state.switcher.selection());

    HeadlessEvent::ready(&state).emit();
    HeadlessEvent::view(&state).emit();
    Ok(())
}
