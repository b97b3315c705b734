//! Foundation types for the site-provisioning pipeline.
//!
//! Plain data only: identifiers, the layout entity record, the type-settings
//! property bag, and the per-run service context. No platform dependencies.

pub mod context;
pub mod ids;
pub mod layout;
pub mod locale;
pub mod settings;

pub use context::ServiceContext;
pub use ids::{ColorSchemeId, GroupId, LayoutId, ThemeId, UserId};
pub use layout::{
    CreateLayout, Layout, LayoutKind, LayoutState, MasterPageEntry, Theme, User, WorkflowStatus,
};
pub use locale::{LocalizedText, Locale, TimeZone, localized};
pub use settings::{THEME_SETTING_PREFIX, TypeSettings};
