//! View switcher - selection state and the two rendered output regions
//!
//! The switcher owns the immutable [`SectionRegistry`], the current selection,
//! the navigation controls and the rendered content and terminal panels. Every
//! successful [`ViewSwitcher::select_section`] replaces both panels wholesale,
//! including when the already-active key is selected again. An unknown key is a
//! silent no-op.

use aether_core::{SectionRecord, SectionRegistry, TerminalLine, DEFAULT_SECTION};
use serde::Serialize;
use tracing::debug;

/// Default number of lines the terminal panel keeps before dropping the oldest
pub const DEFAULT_SCROLLBACK: usize = 200;

/// A navigation entry statically tagged with one section key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavControl {
    pub key: String,
    pub label: String,
    pub active: bool,
}

impl NavControl {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label_for_key(key),
            active: false,
        }
    }
}

/// Rendered content region: heading, paragraph, list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentPanel {
    pub title: String,
    pub description: String,
    pub bullets: Vec<String>,
}

impl ContentPanel {
    pub fn from_record(record: &SectionRecord) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            bullets: record.bullets.clone(),
        }
    }
}

/// Rendered terminal-log region
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TerminalPanel {
    pub lines: Vec<TerminalLine>,
}

impl TerminalPanel {
    /// One prompted line per stored terminal line, in stored order
    pub fn from_record(record: &SectionRecord) -> Self {
        Self {
            lines: record
                .terminal_lines
                .iter()
                .map(TerminalLine::prompted)
                .collect(),
        }
    }

    /// Display strings, prompt included
    pub fn display_lines(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Serializable snapshot of everything the switcher renders
#[derive(Debug, Clone, Serialize)]
pub struct RenderedView<'a> {
    pub selection: &'a str,
    pub generation: u64,
    pub nav: &'a [NavControl],
    pub content: &'a ContentPanel,
    pub terminal: Vec<String>,
}

/// Holds the selection state and keeps both output regions consistent with it
#[derive(Debug, Clone)]
pub struct ViewSwitcher {
    registry: SectionRegistry,
    selection: String,
    nav: Vec<NavControl>,
    content: ContentPanel,
    terminal: TerminalPanel,
    generation: u64,
    scrollback: usize,
}

impl ViewSwitcher {
    /// Create one navigation control per registered key, then select
    /// [`DEFAULT_SECTION`] to establish the initial rendered state.
    ///
    /// A registry without the default key starts on its first entry instead.
    pub fn new(registry: SectionRegistry) -> Self {
        let nav = registry.keys().map(NavControl::new).collect();
        let mut switcher = Self {
            registry,
            selection: String::new(),
            nav,
            content: ContentPanel::default(),
            terminal: TerminalPanel::default(),
            generation: 0,
            scrollback: DEFAULT_SCROLLBACK,
        };

        if !switcher.select_section(DEFAULT_SECTION) {
            switcher.select_index(0);
        }
        switcher
    }

    /// Limit on terminal panel lines kept when appending output (minimum 1)
    pub fn with_scrollback(mut self, scrollback: usize) -> Self {
        self.scrollback = scrollback.max(1);
        self
    }

    /// Select a section by key.
    ///
    /// Returns `false` and changes nothing when `key` is not registered.
    pub fn select_section(&mut self, key: &str) -> bool {
        let Some(record) = self.registry.get(key) else {
            return false;
        };

        self.selection = key.to_string();
        for control in &mut self.nav {
            control.active = control.key == key;
        }
        self.content = ContentPanel::from_record(record);
        self.terminal = TerminalPanel::from_record(record);
        self.generation += 1;

        debug!(section = key, generation = self.generation, "Section rendered");
        true
    }

    /// Select by navigation index; out of range is a no-op
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.registry.key_at(index).map(str::to_string) {
            Some(key) => self.select_section(&key),
            None => false,
        }
    }

    /// Select the next section, wrapping to the first
    pub fn select_next(&mut self) -> bool {
        let len = self.registry.len();
        if len == 0 {
            return false;
        }
        let next = self.active_index().map_or(0, |i| (i + 1) % len);
        self.select_index(next)
    }

    /// Select the previous section, wrapping to the last
    pub fn select_previous(&mut self) -> bool {
        let len = self.registry.len();
        if len == 0 {
            return false;
        }
        let previous = self.active_index().map_or(0, |i| (i + len - 1) % len);
        self.select_index(previous)
    }

    /// Append a line to the terminal panel, dropping the oldest past scrollback
    pub fn append_terminal_line(&mut self, line: TerminalLine) {
        self.terminal.lines.push(line);
        let overflow = self.terminal.lines.len().saturating_sub(self.scrollback);
        if overflow > 0 {
            self.terminal.lines.drain(..overflow);
        }
    }

    /// Currently active section key
    pub fn selection(&self) -> &str {
        &self.selection
    }

    /// Navigation index of the active section
    pub fn active_index(&self) -> Option<usize> {
        self.registry.position(&self.selection)
    }

    pub fn nav(&self) -> &[NavControl] {
        &self.nav
    }

    pub fn content(&self) -> &ContentPanel {
        &self.content
    }

    pub fn terminal(&self) -> &TerminalPanel {
        &self.terminal
    }

    /// Number of successful renders since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn rendered(&self) -> RenderedView<'_> {
        RenderedView {
            selection: &self.selection,
            generation: self.generation,
            nav: &self.nav,
            content: &self.content,
            terminal: self.terminal.display_lines(),
        }
    }
}

impl Default for ViewSwitcher {
    fn default() -> Self {
        Self::new(SectionRegistry::builtin())
    }
}

/// Title-case a section key for display ("workspace" -> "Workspace")
fn label_for_key(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
