//! # siteinit-core
//!
//! The declarative layout-import pipeline. Given a target site, the
//! [`SiteInitializer`] reads the bundled manifest, creates one layout per
//! entry in manifest order, places page elements into each content layout's
//! draft structure, reconciles settings onto the draft, and promotes the
//! draft onto the live record.
//!
//! ## Design Principle
//!
//! This crate owns the shape and ordering of the pipeline, nothing else.
//! Everything stateful — persistence, theming, fragment import, user
//! resolution — is consumed through the `siteinit-traits` seams, so the
//! pipeline runs against any host platform (or the in-memory one in tests).

pub mod config;
pub mod context;
pub mod error;
pub mod importer;
pub mod initializer;
pub mod reconciler;

pub use config::InitializerConfig;
pub use error::InitializationError;
pub use importer::PageStructureImporter;
pub use initializer::{SiteInitializer, SiteInitializerBuilder};
pub use reconciler::SettingsReconciler;
