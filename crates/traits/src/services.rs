//! Service traits for the host platform collaborators.
//!
//! The pipeline never persists anything itself; every create/update call
//! goes through one of these seams. Implementations are assumed to be
//! transactional at their own boundary.

use crate::resource::SharedResourceData;
use siteinit_structure::LayoutStructure;
use siteinit_types::{
    CreateLayout, GroupId, Layout, LayoutId, Locale, MasterPageEntry, ServiceContext, Theme,
    ThemeId, ColorSchemeId, TypeSettings, User, UserId,
};
use thiserror::Error;

/// Error type for collaborator calls.
///
/// Every downstream failure surfaces through this one type; the pipeline
/// wraps it once and never retries.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("layout {0} not found")]
    LayoutNotFound(LayoutId),

    #[error("layout {0} has no draft counterpart")]
    DraftNotFound(LayoutId),

    #[error("no structure persisted for layout {0}")]
    StructureNotFound(LayoutId),

    #[error("user {0} not found")]
    UserNotFound(UserId),

    #[error("{service} call failed: {message}")]
    Collaborator {
        service: &'static str,
        message: String,
    },
}

/// Layout persistence and publication, owned by the host platform.
pub trait LayoutService: Send + Sync {
    /// Creates a new layout record. For content layouts the platform also
    /// materializes the editable draft counterpart with an empty structure.
    fn add_layout(
        &self,
        ctx: &ServiceContext,
        request: CreateLayout,
    ) -> Result<Layout, ServiceError>;

    /// Navigates from a published record to its draft counterpart.
    fn fetch_draft_layout(&self, layout: &Layout) -> Result<Layout, ServiceError>;

    /// Persists a replacement type-settings bag and returns the fresh record.
    fn update_type_settings(
        &self,
        layout: &Layout,
        settings: &TypeSettings,
    ) -> Result<Layout, ServiceError>;

    /// Applies theme id, color scheme, and css as one look-and-feel update.
    /// A `None` theme id is applied as given and clears the current theme.
    fn update_look_and_feel(
        &self,
        layout: &Layout,
        theme_id: Option<ThemeId>,
        color_scheme_id: Option<ColorSchemeId>,
        css: &str,
    ) -> Result<Layout, ServiceError>;

    /// Links the layout to a master page's layout record.
    fn update_master_layout(
        &self,
        layout: &Layout,
        master_layout_id: LayoutId,
    ) -> Result<Layout, ServiceError>;

    /// Promotes a draft: copies its configuration (including structure data)
    /// onto the published counterpart and marks both records approved.
    ///
    /// The whole promotion is one transactional boundary — implementations
    /// must not leave a partially approved pair behind. Returns the updated
    /// published record.
    fn promote(&self, ctx: &ServiceContext, draft: &Layout) -> Result<Layout, ServiceError>;
}

/// Persistence of the opaque structure blob attached to each layout.
pub trait LayoutStructureService: Send + Sync {
    /// Fetches the persisted structure data of a layout.
    fn fetch_structure_data(&self, layout: &Layout) -> Result<String, ServiceError>;

    /// Persists a mutated structure model for a layout. Serialization is the
    /// implementation's concern.
    fn save_structure(
        &self,
        layout: &Layout,
        structure: &LayoutStructure,
    ) -> Result<(), ServiceError>;
}

/// Read access to the themes registered in a scope.
pub trait ThemeRegistry: Send + Sync {
    fn themes(&self, group_id: GroupId) -> Result<Vec<Theme>, ServiceError>;
}

/// Lookup of master-page template entries by key within a scope.
pub trait MasterPageRegistry: Send + Sync {
    /// `None` when no entry carries the key — callers treat that as a no-op,
    /// not a failure.
    fn fetch_entry(
        &self,
        group_id: GroupId,
        key: &str,
    ) -> Result<Option<MasterPageEntry>, ServiceError>;
}

/// Imports a bundled fragment archive as a unit.
pub trait FragmentImporter: Send + Sync {
    fn import_archive(
        &self,
        ctx: &ServiceContext,
        archive: SharedResourceData,
        overwrite: bool,
    ) -> Result<(), ServiceError>;
}

/// Resolution of the acting user and site localization defaults.
pub trait UserDirectory: Send + Sync {
    fn current_user(&self) -> Result<User, ServiceError>;

    /// The site default locale used for localized names.
    fn default_locale(&self) -> Locale;
}
