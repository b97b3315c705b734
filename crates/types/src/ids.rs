//! Newtype wrappers for semantic identifiers
//!
//! These types provide compile-time type safety to prevent mixing up the
//! different kinds of identifiers the host platform hands out (site groups,
//! users, layout records, themes, color schemes).

use std::fmt;
use std::sync::Arc;

/// The opaque identifier of a target site (a "group" in platform terms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(u64);

impl GroupId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for GroupId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identifier of a platform user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identifier of a single layout record.
///
/// A draft layout and its published counterpart are two records with two
/// distinct `LayoutId`s sharing one logical identity; the link between them
/// is carried by [`crate::layout::LayoutState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayoutId(u64);

impl LayoutId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for LayoutId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identifier of a registered theme.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ThemeId(Arc<str>);

impl ThemeId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ThemeId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ThemeId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ThemeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identifier of a theme's color scheme.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ColorSchemeId(Arc<str>);

impl ColorSchemeId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ColorSchemeId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ColorSchemeId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ColorSchemeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorSchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
