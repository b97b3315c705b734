//! The per-layout type-settings property bag.
//!
//! Persisted as a single flat, ordered key-value bag in which every key
//! prefixed `lfr-theme:` belongs to the theme-settings namespace. Internally
//! the two namespaces are kept as separate maps; the flat namespaced form
//! only exists at the persistence boundary ([`TypeSettings::to_flat`] /
//! [`TypeSettings::from_flat`]).

use indexmap::IndexMap;

/// Prefix marking a key as owned by the theme-settings merge step.
pub const THEME_SETTING_PREFIX: &str = "lfr-theme:";

/// An ordered property bag attached to a layout record.
///
/// The theme namespace is cleared and rewritten wholesale on every settings
/// reconciliation pass; plain keys are never touched by that pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSettings {
    /// Theme-namespace entries, keyed without the `lfr-theme:` prefix.
    theme: IndexMap<String, String>,
    /// Everything else, keyed verbatim.
    plain: IndexMap<String, String>,
}

impl TypeSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property, routing it by namespace.
    ///
    /// Keys carrying the `lfr-theme:` prefix land in the theme namespace
    /// (stored with the prefix stripped); all other keys are plain.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        match key.strip_prefix(THEME_SETTING_PREFIX) {
            Some(theme_key) => {
                self.theme.insert(theme_key.to_string(), value.into());
            }
            None => {
                self.plain.insert(key, value.into());
            }
        }
    }

    /// Looks up a property by its flat (possibly namespaced) key.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key.strip_prefix(THEME_SETTING_PREFIX) {
            Some(theme_key) => self.theme.get(theme_key).map(String::as_str),
            None => self.plain.get(key).map(String::as_str),
        }
    }

    /// Removes every entry in the theme namespace. Plain keys are kept.
    pub fn clear_theme_settings(&mut self) {
        self.theme.clear();
    }

    /// The theme-namespace keys in their flat, prefixed form.
    pub fn theme_keys(&self) -> Vec<String> {
        self.theme
            .keys()
            .map(|key| format!("{THEME_SETTING_PREFIX}{key}"))
            .collect()
    }

    pub fn theme_len(&self) -> usize {
        self.theme.len()
    }

    pub fn len(&self) -> usize {
        self.theme.len() + self.plain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theme.is_empty() && self.plain.is_empty()
    }

    /// Reads the bag from its flat persisted form.
    pub fn from_flat<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut settings = Self::new();
        for (key, value) in entries {
            settings.set(key, value);
        }
        settings
    }

    /// Serializes the bag back to its flat persisted form: plain keys first,
    /// then the theme namespace with its prefix restored.
    pub fn to_flat(&self) -> IndexMap<String, String> {
        let mut flat = IndexMap::with_capacity(self.len());
        for (key, value) in &self.plain {
            flat.insert(key.clone(), value.clone());
        }
        for (key, value) in &self.theme {
            flat.insert(format!("{THEME_SETTING_PREFIX}{key}"), value.clone());
        }
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_routes_by_prefix() {
        let mut settings = TypeSettings::new();
        settings.set("lfr-theme:regular:show-footer", "true");
        settings.set("layout-template-id", "1_column");

        assert_eq!(settings.theme_len(), 1);
        assert_eq!(settings.len(), 2);
        assert_eq!(settings.get("lfr-theme:regular:show-footer"), Some("true"));
        assert_eq!(settings.get("layout-template-id"), Some("1_column"));
    }

    #[test]
    fn test_clear_theme_settings_keeps_plain_keys() {
        let mut settings = TypeSettings::new();
        settings.set("lfr-theme:regular:show-footer", "true");
        settings.set("lfr-theme:regular:show-header", "false");
        settings.set("layout-template-id", "1_column");

        settings.clear_theme_settings();

        assert_eq!(settings.theme_len(), 0);
        assert_eq!(settings.get("layout-template-id"), Some("1_column"));
    }

    #[test]
    fn test_flat_round_trip() {
        let mut settings = TypeSettings::new();
        settings.set("layout-template-id", "1_column");
        settings.set("lfr-theme:regular:show-footer", "true");

        let flat = settings.to_flat();
        assert_eq!(flat.get("layout-template-id").map(String::as_str), Some("1_column"));
        assert_eq!(
            flat.get("lfr-theme:regular:show-footer").map(String::as_str),
            Some("true")
        );

        let reread = TypeSettings::from_flat(flat);
        assert_eq!(reread, settings);
    }

    #[test]
    fn test_clear_then_rewrite_is_idempotent() {
        let mut settings = TypeSettings::new();
        settings.set("lfr-theme:stale", "old");

        for _ in 0..2 {
            settings.clear_theme_settings();
            settings.set("lfr-theme:regular:show-footer", "true");
            settings.set("lfr-theme:regular:show-header", "false");
        }

        let mut keys = settings.theme_keys();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "lfr-theme:regular:show-footer".to_string(),
                "lfr-theme:regular:show-header".to_string(),
            ]
        );
    }

    #[test]
    fn test_overwrite_same_key() {
        let mut settings = TypeSettings::new();
        settings.set("lfr-theme:key", "a");
        settings.set("lfr-theme:key", "b");

        assert_eq!(settings.theme_len(), 1);
        assert_eq!(settings.get("lfr-theme:key"), Some("b"));
    }
}
