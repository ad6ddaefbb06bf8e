//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `anvil-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Blueprint, InitializrMetadata, ProjectStructure};
use crate::error::AnvilResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `anvil_adapters::filesystem::LocalFilesystem` (production)
/// - `anvil_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Failures are reported as `ApplicationError::FilesystemError` naming the
/// path and the operation.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    ///
    /// Succeeds if the directory already exists.
    fn create_dir_all(&self, path: &Path) -> AnvilResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> AnvilResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> AnvilResult<()>;
}

/// Port for turning a blueprint into file contents.
///
/// Implemented by:
/// - `anvil_adapters::renderer::GradleRenderer` (Gradle Groovy DSL + Java)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render every node of `blueprint` into a structure rooted at
    /// `output_root`.
    fn render(&self, blueprint: &Blueprint, output_root: &Path) -> AnvilResult<ProjectStructure>;
}

/// Port for the remote version metadata document.
///
/// Implemented by:
/// - `anvil_adapters::metadata::HttpMetadataSource` (start.spring.io)
/// - `anvil_adapters::metadata::UnavailableMetadataSource` (offline runs)
#[cfg_attr(test, mockall::automock)]
pub trait MetadataSource: Send + Sync {
    /// Fetch the metadata document once. No retries.
    fn fetch(&self) -> AnvilResult<InitializrMetadata>;
}
