//! Application layer for Anvil.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, VersionResolver)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerationReport, ResolvedVersions, ScaffoldService, VersionResolver, WritePolicy};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, MetadataSource, TemplateRenderer};

pub use error::ApplicationError;
