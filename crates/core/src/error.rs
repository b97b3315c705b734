// src/error.rs
//! The unified error type surfaced by an initialization run.

use siteinit_descriptor::DescriptorError;
use siteinit_structure::StructureError;
use siteinit_traits::{ResourceError, ServiceError};
use thiserror::Error;

/// The single failure type a caller sees.
///
/// Nothing is recovered or retried internally: the first fatal condition
/// propagates up, wrapped once, and the host workflow decides whether to
/// abort site creation.
#[derive(Error, Debug)]
pub enum InitializationError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("descriptor error: {0}")]
    Descriptor(#[from] DescriptorError),

    #[error("structure error: {0}")]
    Structure(#[from] StructureError),

    #[error("collaborator failure: {0}")]
    Service(#[from] ServiceError),
}
