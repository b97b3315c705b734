//! Locale and time-zone newtypes plus localized text maps.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A locale identifier such as `en_US`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Locale(Arc<str>);

impl Locale {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en_US")
    }
}

impl From<String> for Locale {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for Locale {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An IANA time-zone identifier such as `UTC` or `Europe/Oslo`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TimeZone(Arc<str>);

impl TimeZone {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::new("UTC")
    }
}

impl From<String> for TimeZone {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for TimeZone {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A per-locale text map, as the platform stores layout names and titles.
pub type LocalizedText = BTreeMap<Locale, String>;

/// Builds a single-entry localized text map.
pub fn localized(locale: Locale, value: impl Into<String>) -> LocalizedText {
    let mut map = LocalizedText::new();
    map.insert(locale, value.into());
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_defaults() {
        assert_eq!(Locale::default().as_str(), "en_US");
        assert_eq!(TimeZone::default().as_str(), "UTC");
    }

    #[test]
    fn test_localized_single_entry() {
        let name = localized(Locale::new("en_US"), "Home");
        assert_eq!(name.len(), 1);
        assert_eq!(name.get(&Locale::new("en_US")).map(String::as_str), Some("Home"));
    }
}
