//! Parsing of the bundled declarative descriptors.
//!
//! Three documents drive a site initialization: the layout manifest
//! (`layouts.json`), one page descriptor per entry (`page.json`), and for
//! content pages a page definition (`page-definition.json`) holding the
//! page-element tree and an optional settings sub-document. Parsing is
//! strict where the pipeline is strict (missing `path`/`name`/`type` is
//! fatal) and tolerant where it is tolerant (optional sub-documents).

pub mod definition;
pub mod error;
pub mod manifest;
pub mod page;

pub use definition::{MasterPageRef, PageDefinition, PageElementNode, SettingsDocument};
pub use error::DescriptorError;
pub use manifest::{Manifest, ManifestEntry};
pub use page::PageDescriptor;
