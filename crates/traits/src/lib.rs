//! Platform abstraction traits for the site-provisioning pipeline.
//!
//! The pipeline is a consumer of a much larger host platform. Everything it
//! needs from that platform — bundled resources, layout persistence, theme
//! lookup, master-page templates, fragment import, user resolution — is
//! consumed through the traits in this crate, so the pipeline itself stays
//! free of platform dependencies.

pub mod resource;
pub mod services;

pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
pub use services::{
    FragmentImporter, LayoutService, LayoutStructureService, MasterPageRegistry, ServiceError,
    ThemeRegistry, UserDirectory,
};
