//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Validate the configuration
//! 2. Plan the blueprint (pure)
//! 3. Render it into a project structure
//! 4. Write the structure in order
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, info_span, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer},
    },
    domain::{Blueprint, DomainValidator as validator, FsEntry, ProjectConfig, ProjectStructure},
    error::AnvilResult,
};

/// What to do when the project root already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WritePolicy {
    /// Reject before writing anything.
    #[default]
    FailIfExists,
    /// Rewrite every generated file in place; unrelated files are kept.
    Overwrite,
}

/// Summary of a successful generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub run_id: Uuid,
    pub root: PathBuf,
    pub files: usize,
    pub directories: usize,
    /// `true` when the root existed and was overwritten in place.
    pub overwritten: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use anvil_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     Box::new(GradleRenderer::new()),
    ///     Box::new(LocalFilesystem::new()),
    /// );
    /// ```
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Compute and render the project without touching the filesystem.
    #[instrument(
        skip_all,
        fields(project = %config.project_name(), output_dir = %output_dir.display())
    )]
    pub fn plan(&self, config: &ProjectConfig, output_dir: &Path) -> AnvilResult<ProjectStructure> {
        validator::validate_config(config)?;

        let blueprint = Blueprint::plan(config);
        validator::validate_blueprint(&blueprint)?;
        debug!(nodes = blueprint.len(), "Blueprint planned");

        let root = output_dir.join(blueprint.root_name());
        let structure = self.renderer.render(&blueprint, &root)?;
        validator::validate_project_structure(&structure)?;

        if structure.root() != root {
            return Err(ApplicationError::ValidationFailed(format!(
                "renderer produced root {} instead of {}",
                structure.root().display(),
                root.display()
            ))
            .into());
        }
        if structure.entry_count() != blueprint.len() {
            return Err(ApplicationError::ValidationFailed(format!(
                "renderer produced {} entries for {} planned nodes",
                structure.entry_count(),
                blueprint.len()
            ))
            .into());
        }

        Ok(structure)
    }

    /// Generate the project under `output_dir`.
    pub fn generate(
        &self,
        config: &ProjectConfig,
        output_dir: &Path,
        policy: WritePolicy,
    ) -> AnvilResult<GenerationReport> {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            "generate",
            %run_id,
            project = %config.project_name(),
            ?policy
        );
        let _guard = span.enter();

        info!("Generating {}", config);

        let structure = self.plan(config, output_dir)?;
        let root = structure.root().to_path_buf();

        let existed = self.filesystem.exists(&root);
        if existed && policy == WritePolicy::FailIfExists {
            return Err(ApplicationError::ProjectExists { path: root }.into());
        }
        if existed {
            warn!(path = %root.display(), "Overwriting generated files in existing directory");
        }

        self.write_structure(&structure, !existed)?;

        let report = GenerationReport {
            run_id,
            root,
            files: structure.files().count(),
            directories: structure.directories().count(),
            overwritten: existed,
        };
        info!(
            files = report.files,
            directories = report.directories,
            "Generation completed successfully"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write the structure; on failure roll back only a root this run created.
    fn write_structure(&self, structure: &ProjectStructure, created_root: bool) -> AnvilResult<()> {
        match self.write_all(structure) {
            Ok(()) => Ok(()),
            Err(e) => {
                if created_root {
                    warn!(error = %e, "Write failed, attempting rollback");
                    if let Err(cleanup) = self.rollback(structure.root()) {
                        return Err(ApplicationError::RollbackFailed {
                            path: structure.root().to_path_buf(),
                            cause: e.to_string(),
                            reason: cleanup.to_string(),
                        }
                        .into());
                    }
                } else {
                    warn!(error = %e, "Write failed, existing directory left in place");
                }
                Err(e)
            }
        }
    }

    /// Write all entries in the structure, strictly in order.
    fn write_all(&self, structure: &ProjectStructure) -> AnvilResult<()> {
        self.filesystem.create_dir_all(structure.root())?;

        for entry in structure.entries() {
            let path = structure.root().join(entry.path());
            match entry {
                FsEntry::Directory(_) => {
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File(file) => {
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                    debug!(path = %path.display(), bytes = file.size(), "Wrote file");
                }
            }
        }

        Ok(())
    }

    /// Remove a root this run created.
    fn rollback(&self, root: &Path) -> AnvilResult<()> {
        match self.filesystem.remove_dir_all(root) {
            Ok(()) => {
                info!("Rollback successful");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, path = %root.display(), "Rollback failed");
                Err(e)
            }
        }
    }
}
