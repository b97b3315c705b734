//! Resource provider implementations.
//!
//! The in-memory provider lives next to the [`siteinit_traits::ResourceProvider`]
//! trait itself; this crate adds providers with platform dependencies.

mod filesystem;

pub use filesystem::FilesystemResourceProvider;
