//! The layout entity record and its companion platform entities.
//!
//! A layout exists in two materializations: an editable draft and a served
//! published record. The two share one logical identity; the draft carries a
//! link back to its published counterpart. Workflow status (draft/approved)
//! is independent of that materialization split.

use crate::ids::{ColorSchemeId, GroupId, LayoutId, ThemeId, UserId};
use crate::locale::{Locale, LocalizedText, TimeZone};
use crate::settings::TypeSettings;

/// The kind of page a layout renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// A content page composed of fragments via a page definition.
    Content,
    /// A classic widget (portlet) page.
    Portlet,
}

impl LayoutKind {
    /// Maps a descriptor's declared `type` string, case-insensitively.
    /// Anything other than `content` is a widget page.
    pub fn from_declared(declared: &str) -> Self {
        if declared.eq_ignore_ascii_case("content") {
            LayoutKind::Content
        } else {
            LayoutKind::Portlet
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutKind::Content => "content",
            LayoutKind::Portlet => "portlet",
        }
    }
}

/// Which materialization of the logical layout a record is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutState {
    /// The editable working copy, linked to its served counterpart.
    Draft { published_id: LayoutId },
    /// The served copy.
    Published,
}

/// Publication workflow status, independent of draft/published state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStatus {
    Draft,
    Approved,
}

/// A single layout record within the host platform.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub id: LayoutId,
    pub group_id: GroupId,
    pub name: LocalizedText,
    pub private: bool,
    pub kind: LayoutKind,
    pub parent_id: Option<LayoutId>,
    pub state: LayoutState,
    pub status: WorkflowStatus,
    pub theme_id: Option<ThemeId>,
    pub color_scheme_id: Option<ColorSchemeId>,
    pub css: String,
    pub type_settings: TypeSettings,
    pub master_layout_id: Option<LayoutId>,
}

impl Layout {
    pub fn is_draft(&self) -> bool {
        matches!(self.state, LayoutState::Draft { .. })
    }

    /// The published counterpart's id, when this record is a draft.
    pub fn published_id(&self) -> Option<LayoutId> {
        match self.state {
            LayoutState::Draft { published_id } => Some(published_id),
            LayoutState::Published => None,
        }
    }

    pub fn display_name(&self, locale: &Locale) -> Option<&str> {
        self.name.get(locale).map(String::as_str)
    }
}

/// Request payload for creating a new layout record.
#[derive(Debug, Clone)]
pub struct CreateLayout {
    pub group_id: GroupId,
    pub private: bool,
    pub parent_id: Option<LayoutId>,
    pub name: LocalizedText,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub kind: LayoutKind,
    pub hidden: bool,
}

/// A theme registered with the host platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub id: ThemeId,
    pub name: String,
}

/// A master-page template entry that layouts can link to for shared chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterPageEntry {
    pub group_id: GroupId,
    pub key: String,
    pub layout_id: LayoutId,
}

/// The platform user on whose behalf the initialization runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub time_zone: TimeZone,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_declared_is_case_insensitive() {
        assert_eq!(LayoutKind::from_declared("content"), LayoutKind::Content);
        assert_eq!(LayoutKind::from_declared("Content"), LayoutKind::Content);
        assert_eq!(LayoutKind::from_declared("CONTENT"), LayoutKind::Content);
        assert_eq!(LayoutKind::from_declared("widget"), LayoutKind::Portlet);
        assert_eq!(LayoutKind::from_declared("portlet"), LayoutKind::Portlet);
        assert_eq!(LayoutKind::from_declared(""), LayoutKind::Portlet);
    }

    #[test]
    fn test_draft_links_to_published() {
        let state = LayoutState::Draft {
            published_id: LayoutId::new(11),
        };
        match state {
            LayoutState::Draft { published_id } => assert_eq!(published_id, LayoutId::new(11)),
            LayoutState::Published => panic!("expected draft"),
        }
    }
}
