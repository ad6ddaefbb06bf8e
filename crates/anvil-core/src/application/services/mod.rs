//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "resolve versions".

pub mod scaffold_service;
pub mod version_resolver;

pub use scaffold_service::{GenerationReport, ScaffoldService, WritePolicy};
pub use version_resolver::{ResolvedVersions, VersionResolver};
