//! Blueprint renderers.

mod gradle;
mod java;

use std::path::Path;

use anvil_core::{
    application::ports::TemplateRenderer,
    domain::{Blueprint, BlueprintNode, DomainValidator as validator, FileContent, ProjectStructure},
    error::{AnvilResult, Context},
};
use tracing::{debug, instrument};

pub use gradle::dependency_line;
pub use java::RenderContext;

/// Renders Gradle Groovy build scripts and Java sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradleRenderer;

impl GradleRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_content(&self, content: &FileContent) -> AnvilResult<String> {
        match content {
            FileContent::Empty => Ok(String::new()),
            FileContent::Settings(settings) => {
                gradle::render_settings(settings).context("rendering settings.gradle")
            }
            FileContent::RootBuild(root) => {
                gradle::render_root_build(root).context("rendering root build.gradle")
            }
            FileContent::ModuleBuild(module) => gradle::render_module_build(module)
                .context(format!("rendering {} build.gradle", module.module)),
            FileContent::Source(source) => java::render_source(source),
        }
    }
}

impl TemplateRenderer for GradleRenderer {
    #[instrument(skip_all, fields(root = %output_root.display()))]
    fn render(&self, blueprint: &Blueprint, output_root: &Path) -> AnvilResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(output_root);

        for node in blueprint.nodes() {
            match node {
                BlueprintNode::Directory(path) => structure.add_directory(path.as_path()),
                BlueprintNode::File { path, content } => {
                    let text = self.render_content(content)?;
                    structure.add_file(path.as_path(), text);
                }
            }
        }

        validator::validate_project_structure(&structure)?;
        debug!(entries = structure.entry_count(), "Blueprint rendered");
        Ok(structure)
    }
}
