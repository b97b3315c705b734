//! # siteinit
//!
//! Declarative site provisioning for a content-management host platform:
//! bundled descriptors in, typed layout/theming service calls out.
//!
//! The pipeline lives in `siteinit-core`; this crate is the integration
//! layer. It re-exports the public surface of the member crates and ships
//! an in-memory reference platform ([`memory::InMemoryPlatform`]) that
//! implements every service seam, for tests and bundle dry-runs.

// Re-export foundation crates
pub use siteinit_descriptor as descriptor;
pub use siteinit_structure as structure;
pub use siteinit_traits as traits;
pub use siteinit_types as types;

// Re-export the pipeline crate
pub use siteinit_core as pipeline;

pub mod memory;

// Re-export commonly used types from foundation crates
pub use siteinit_types::{
    ColorSchemeId, CreateLayout, GroupId, Layout, LayoutId, LayoutKind, LayoutState, Locale,
    LocalizedText, MasterPageEntry, ServiceContext, Theme, ThemeId, TimeZone, TypeSettings, User,
    UserId, WorkflowStatus, localized,
};

// Re-export platform abstraction traits
pub use siteinit_traits::{
    FragmentImporter, InMemoryResourceProvider, LayoutService, LayoutStructureService,
    MasterPageRegistry, ResourceError, ResourceProvider, ServiceError, SharedResourceData,
    ThemeRegistry, UserDirectory,
};

// Re-export descriptor and structure models
pub use siteinit_descriptor::{
    DescriptorError, Manifest, ManifestEntry, PageDefinition, PageDescriptor, PageElementNode,
    SettingsDocument,
};
pub use siteinit_structure::{ItemId, LayoutStructure, StructureError, StructureItem};

// Re-export the pipeline surface
pub use siteinit_core::{
    InitializationError, InitializerConfig, PageStructureImporter, SettingsReconciler,
    SiteInitializer, SiteInitializerBuilder,
};

// Re-export platform providers
pub use siteinit_resource::FilesystemResourceProvider;
