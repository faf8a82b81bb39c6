//! Section records and the registry behind the navigation column
//!
//! The registry is embedded literal data: it is built once at startup by
//! [`SectionRegistry::builtin`] and never mutated afterwards. Lookups return an
//! `Option` so callers handle unknown keys with an explicit branch.

use serde::Serialize;

/// Key of the section rendered at startup
pub const DEFAULT_SECTION: &str = "overview";

/// Display payload for one navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRecord {
    /// Short display heading
    pub title: String,
    /// Paragraph shown under the heading
    pub description: String,
    /// Bullet list, in display order
    pub bullets: Vec<String>,
    /// Mock log lines for the terminal panel, in display order
    pub terminal_lines: Vec<String>,
}

impl SectionRecord {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            bullets: Vec::new(),
            terminal_lines: Vec::new(),
        }
    }

    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets = bullets.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_terminal_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terminal_lines = lines.into_iter().map(Into::into).collect();
        self
    }
}

/// Ordered mapping from section key to [`SectionRecord`]
///
/// Insertion order is navigation order. Registering an existing key replaces
/// its record in place.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    entries: Vec<(String, SectionRecord)>,
}

impl SectionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The three sections of the desktop shell preview
    pub fn builtin() -> Self {
        Self::new()
            .with_section(
                "overview",
                SectionRecord::new(
                    "Desktop shell preview",
                    "High-level snapshot of the AI desktop shell direction. Use this space to \
                     validate layout, motion, and Mint-inspired visuals before wiring services.",
                )
                .with_bullets([
                    "Cinnamon-friendly theming with green highlights and glass panels.",
                    "Wallpaper hosts a floating terminal mock for the AI command layer.",
                    "Navigation will expand to workspaces, launchers, and agent settings.",
                ])
                .with_terminal_lines([
                    "aether@mint ➜ shell status: prototype",
                    "aether@mint ➜ ai-core link: pending",
                    "aether@mint ➜ workspace tiles: loading stubs",
                ]),
            )
            .with_section(
                "workspace",
                SectionRecord::new(
                    "Workspace layout",
                    "Interactive zones for app tiles, assistant cards, and quick actions. The \
                     final shell will let users pin widgets next to the AI terminal.",
                )
                .with_bullets([
                    "Grid-ready canvas for apps and assistant tiles.",
                    "Accent states mirror Mint with subtle gradients and rounded corners.",
                    "Terminal stays docked to keep the command layer always visible.",
                ])
                .with_terminal_lines([
                    "aether@mint ➜ loading workspace canvas",
                    "aether@mint ➜ pinning assistant cards...",
                    "aether@mint ➜ new tile: system monitor stub",
                ]),
            )
            .with_section(
                "settings",
                SectionRecord::new(
                    "Theme and system settings",
                    "Controls for wallpaper, shell color scheme, and AI connectivity. This space \
                     will also surface metrics for GPU/CPU and model runtimes.",
                )
                .with_bullets([
                    "Toggle Mint-inspired dark theme and accent intensity.",
                    "Configure local/remote AI endpoints for shell commands.",
                    "Preview telemetry widgets for resource usage.",
                ])
                .with_terminal_lines([
                    "aether@mint ➜ applying mint-dark theme",
                    "aether@mint ➜ telemetry daemon: awaiting signal",
                    "aether@mint ➜ configs stored in ~/.aetheros",
                ]),
            )
    }

    /// Add (or replace) a section while building the registry
    pub fn with_section(mut self, key: impl Into<String>, record: SectionRecord) -> Self {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = record,
            None => self.entries.push((key, record)),
        }
        self
    }

    /// Look up a record by key
    pub fn get(&self, key: &str) -> Option<&SectionRecord> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, record)| record)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Navigation index of a key
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Key at a navigation index
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(k, _)| k.as_str())
    }

    /// Keys in navigation order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SectionRecord)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keys_in_navigation_order() {
        let registry = SectionRegistry::builtin();
        let keys: Vec<&str> = registry.keys().collect();
        assert_eq!(keys, vec!["overview", "workspace", "settings"]);
    }

    #[test]
    fn test_builtin_contains_default_section() {
        let registry = SectionRegistry::builtin();
        assert!(registry.contains(DEFAULT_SECTION));
        assert_eq!(registry.position(DEFAULT_SECTION), Some(0));
    }

    #[test]
    fn test_builtin_records_have_three_bullets_and_lines() {
        let registry = SectionRegistry::builtin();
        for (key, record) in registry.iter() {
            assert_eq!(record.bullets.len(), 3, "bullets for {key}");
            assert_eq!(record.terminal_lines.len(), 3, "terminal lines for {key}");
        }
    }

    #[test]
    fn test_builtin_titles() {
        let registry = SectionRegistry::builtin();
        assert_eq!(
            registry.get("overview").map(|r| r.title.as_str()),
            Some("Desktop shell preview")
        );
        assert_eq!(
            registry.get("workspace").map(|r| r.title.as_str()),
            Some("Workspace layout")
        );
        assert_eq!(
            registry.get("settings").map(|r| r.title.as_str()),
            Some("Theme and system settings")
        );
    }

    #[test]
    fn test_description_continuation_keeps_single_spaces() {
        let registry = SectionRegistry::builtin();
        let overview = registry.get("overview").unwrap();
        assert!(overview
            .description
            .contains("Use this space to validate layout"));
        assert!(!overview.description.contains("  "));
    }

    #[test]
    fn test_unknown_key_lookup_is_none() {
        let registry = SectionRegistry::builtin();
        assert!(registry.get("launcher").is_none());
        assert!(registry.get("").is_none());
        assert!(registry.get("Overview").is_none());
        assert_eq!(registry.position("launcher"), None);
    }

    #[test]
    fn test_key_at_out_of_range() {
        let registry = SectionRegistry::builtin();
        assert_eq!(registry.key_at(2), Some("settings"));
        assert_eq!(registry.key_at(3), None);
    }

    #[test]
    fn test_with_section_replaces_existing_key_in_place() {
        let registry = SectionRegistry::new()
            .with_section("a", SectionRecord::new("A", "first"))
            .with_section("b", SectionRecord::new("B", "second"))
            .with_section("a", SectionRecord::new("A2", "replaced"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.key_at(0), Some("a"));
        assert_eq!(registry.get("a").map(|r| r.title.as_str()), Some("A2"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = SectionRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.keys().count(), 0);
    }
}
