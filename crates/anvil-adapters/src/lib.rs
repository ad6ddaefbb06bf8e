//! Infrastructure adapters for Anvil.
//!
//! This crate implements the ports defined in `anvil-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod metadata;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use metadata::{HttpMetadataSource, UnavailableMetadataSource};
pub use renderer::GradleRenderer;
