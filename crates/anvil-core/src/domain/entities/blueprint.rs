//! Pure project tree computation.
//!
//! [`Blueprint::plan`] maps a validated [`ProjectConfig`] to the ordered list
//! of directories and files a generation pass creates. No I/O happens here;
//! content is typed so renderers and tests can inspect it without parsing
//! text.

use std::collections::HashSet;

use crate::domain::entities::build_descriptor::{
    ModuleBuildDescriptor, RootBuildDescriptor, SettingsDescriptor,
};
use crate::domain::entities::common::RelativePath;
use crate::domain::entities::ProjectConfig;
use crate::domain::error::DomainError;
use crate::domain::naming::JavaPackage;
use crate::domain::stubs;
use crate::domain::value_objects::{Module, TypeKind};

pub const SETTINGS_FILE: &str = "settings.gradle";
pub const BUILD_FILE: &str = "build.gradle";
pub const APPLICATION_CONFIG: &str = "application.yml";

const MAIN_JAVA: &str = "src/main/java";
const TEST_JAVA: &str = "src/test/java";
const MAIN_RESOURCES: &str = "src/main/resources";

/// Java source file to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub module: Module,
    pub package: JavaPackage,
    pub type_name: String,
    pub body: SourceBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceBody {
    /// Empty placeholder declaration.
    Stub(TypeKind),
    /// Spring Boot application class with a `main` method.
    Entrypoint,
}

impl SourceFile {
    /// Location below the project root derived from module and package.
    pub fn expected_path(&self) -> RelativePath {
        RelativePath::new(format!(
            "{}/{MAIN_JAVA}/{}/{}.java",
            self.module,
            self.package.as_path(),
            self.type_name
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Empty,
    Settings(SettingsDescriptor),
    RootBuild(RootBuildDescriptor),
    ModuleBuild(ModuleBuildDescriptor),
    Source(SourceFile),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlueprintNode {
    Directory(RelativePath),
    File {
        path: RelativePath,
        content: FileContent,
    },
}

impl BlueprintNode {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::Directory(path) | Self::File { path, .. } => path,
        }
    }
}

/// Ordered generation plan for one project, relative to its root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    root_name: String,
    nodes: Vec<BlueprintNode>,
}

impl Blueprint {
    /// Compute the full tree for `config`.
    ///
    /// Order: settings file, root build file, then each module in
    /// [`Module::GENERATION_ORDER`] with its source roots, resources (api),
    /// stubs, entrypoint (api) and finally its build file.
    pub fn plan(config: &ProjectConfig) -> Self {
        let mut planner = Planner::default();

        planner.file(
            RelativePath::new(SETTINGS_FILE),
            FileContent::Settings(SettingsDescriptor::from_config(config)),
        );
        planner.file(
            RelativePath::new(BUILD_FILE),
            FileContent::RootBuild(RootBuildDescriptor::from_config(config)),
        );

        let base_path = config.group_id().as_path();
        for module in Module::GENERATION_ORDER {
            planner.dir(RelativePath::new(format!("{module}/{MAIN_JAVA}/{base_path}")));
            planner.dir(RelativePath::new(format!("{module}/{TEST_JAVA}/{base_path}")));

            if module == Module::Api {
                planner.dir(RelativePath::new(format!("{module}/{MAIN_RESOURCES}")));
                planner.file(
                    RelativePath::new(format!("{module}/{MAIN_RESOURCES}/{APPLICATION_CONFIG}")),
                    FileContent::Empty,
                );
            }

            let module_package = match module.sub_package() {
                Some(sub) => config.group_id().join(sub),
                None => config.group_id().clone(),
            };
            for stub in stubs::stubs_for(module, config) {
                planner.source(SourceFile {
                    module,
                    package: module_package.join(stub.package),
                    type_name: stub.type_name.to_string(),
                    body: SourceBody::Stub(stub.kind),
                });
            }

            if module == Module::Api {
                planner.source(SourceFile {
                    module,
                    package: config.group_id().clone(),
                    type_name: config.entrypoint_class_name(),
                    body: SourceBody::Entrypoint,
                });
            }

            planner.file(
                RelativePath::new(format!("{module}/{BUILD_FILE}")),
                FileContent::ModuleBuild(ModuleBuildDescriptor::from_config(module, config)),
            );
        }

        Self {
            root_name: config.root_dir_name(),
            nodes: planner.nodes,
        }
    }

    /// Name of the root directory (`<project>-api`).
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    pub fn nodes(&self) -> &[BlueprintNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn directories(&self) -> impl Iterator<Item = &RelativePath> {
        self.nodes.iter().filter_map(|n| match n {
            BlueprintNode::Directory(path) => Some(path),
            BlueprintNode::File { .. } => None,
        })
    }

    pub fn files(&self) -> impl Iterator<Item = (&RelativePath, &FileContent)> {
        self.nodes.iter().filter_map(|n| match n {
            BlueprintNode::File { path, content } => Some((path, content)),
            BlueprintNode::Directory(_) => None,
        })
    }

    /// Content of the file at `path` (slash-separated), if planned.
    pub fn file(&self, path: &str) -> Option<&FileContent> {
        self.files()
            .find(|(p, _)| p.to_slash_string() == path)
            .map(|(_, content)| content)
    }

    pub fn sources(&self) -> impl Iterator<Item = &SourceFile> {
        self.files().filter_map(|(_, content)| match content {
            FileContent::Source(source) => Some(source),
            _ => None,
        })
    }

    /// Check the structural invariants of the plan.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.nodes.is_empty() {
            return Err(DomainError::InvalidBlueprint("blueprint is empty".into()));
        }

        let mut seen = HashSet::new();
        for node in &self.nodes {
            let path = node.path();
            if path.as_path().is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.to_string(),
                });
            }
            if !seen.insert(path.to_slash_string()) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_slash_string(),
                });
            }

            match node {
                BlueprintNode::File {
                    path,
                    content: FileContent::Source(source),
                } => {
                    if *path != source.expected_path() {
                        return Err(DomainError::PackageMismatch {
                            package: source.package.to_string(),
                            path: path.to_slash_string(),
                        });
                    }
                }
                BlueprintNode::File {
                    content: FileContent::Settings(settings),
                    ..
                } => {
                    if settings.modules != Module::ALL {
                        return Err(DomainError::InvalidBlueprint(
                            "settings must include exactly the four modules".into(),
                        ));
                    }
                }
                _ => {}
            }
        }

        for module in Module::ALL {
            let build = format!("{module}/{BUILD_FILE}");
            if self.file(&build).is_none() {
                return Err(DomainError::InvalidBlueprint(format!(
                    "module {module} has no build file"
                )));
            }
        }

        Ok(())
    }
}

/// Accumulates nodes and creates each stub package directory once.
#[derive(Default)]
struct Planner {
    nodes: Vec<BlueprintNode>,
    dirs: HashSet<RelativePath>,
}

impl Planner {
    fn dir(&mut self, path: RelativePath) {
        if self.dirs.insert(path.clone()) {
            self.nodes.push(BlueprintNode::Directory(path));
        }
    }

    fn file(&mut self, path: RelativePath, content: FileContent) {
        self.nodes.push(BlueprintNode::File { path, content });
    }

    fn source(&mut self, source: SourceFile) {
        let path = source.expected_path();
        if let Some(parent) = path.parent() {
            self.dir(parent);
        }
        self.file(path, FileContent::Source(source));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ApiStyle, DbDriver};

    fn builder() -> crate::domain::entities::ProjectConfigBuilder {
        ProjectConfig::builder()
            .project_name("clinic")
            .group_id("com.example")
            .java_version("21")
            .springboot_version("3.2.0")
    }

    fn paths(bp: &Blueprint) -> Vec<String> {
        bp.nodes().iter().map(|n| n.path().to_slash_string()).collect()
    }

    #[test]
    fn plan_is_valid_for_every_flag_combination() {
        for bits in 0u8..32 {
            let cfg = builder()
                .jpa(bits & 1 != 0)
                .lombok(bits & 2 != 0)
                .mapstruct(bits & 4 != 0)
                .db_drivers(if bits & 8 != 0 { DbDriver::ALL.to_vec() } else { vec![] })
                .api_styles(if bits & 16 != 0 { ApiStyle::ALL.to_vec() } else { vec![] })
                .build()
                .unwrap();
            let bp = Blueprint::plan(&cfg);
            bp.validate().unwrap();

            let top: HashSet<_> = paths(&bp)
                .into_iter()
                .filter_map(|p| p.split('/').next().map(str::to_string))
                .collect();
            let expected: HashSet<String> = ["settings.gradle", "build.gradle"]
                .into_iter()
                .map(str::to_string)
                .chain(Module::ALL.iter().map(|m| m.to_string()))
                .collect();
            assert_eq!(top, expected);
        }
    }

    #[test]
    fn root_files_come_first() {
        let bp = Blueprint::plan(&builder().build().unwrap());
        let p = paths(&bp);
        assert_eq!(p[0], "settings.gradle");
        assert_eq!(p[1], "build.gradle");
        assert_eq!(p[2], "api/src/main/java/com/example");
        assert_eq!(p[3], "api/src/test/java/com/example");
        assert_eq!(p[4], "api/src/main/resources");
        assert_eq!(p[5], "api/src/main/resources/application.yml");
    }

    #[test]
    fn modules_are_emitted_in_generation_order() {
        let bp = Blueprint::plan(&builder().build().unwrap());
        let order: Vec<_> = bp
            .files()
            .filter(|(p, _)| p.to_slash_string().ends_with("/build.gradle"))
            .map(|(_, c)| match c {
                FileContent::ModuleBuild(d) => d.module,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(order, Module::GENERATION_ORDER.to_vec());
    }

    #[test]
    fn module_build_file_closes_each_module() {
        let bp = Blueprint::plan(&builder().build().unwrap());
        let p = paths(&bp);
        let api_build = p.iter().position(|x| x == "api/build.gradle").unwrap();
        let entry = p
            .iter()
            .position(|x| x.ends_with("ClinicApiApplication.java"))
            .unwrap();
        let first_app = p.iter().position(|x| x.starts_with("application/")).unwrap();
        assert!(entry < api_build && api_build < first_app);
    }

    #[test]
    fn stub_packages_match_directories() {
        let bp = Blueprint::plan(&builder().api_style(ApiStyle::Rest).build().unwrap());
        let handler = bp
            .file("application/src/main/java/com/example/application/patient/command/CreatePatientCommand.java")
            .unwrap();
        match handler {
            FileContent::Source(s) => {
                assert_eq!(s.package.to_string(), "com.example.application.patient.command")
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(
            bp.file("api/src/main/java/com/example/patient/controllers/rest/PatientRestController.java")
                .is_some()
        );
    }

    #[test]
    fn entrypoint_sits_in_group_package() {
        let bp = Blueprint::plan(&builder().project_name("pet-clinic").build().unwrap());
        assert_eq!(bp.root_name(), "pet-clinic-api");
        let entry = bp
            .sources()
            .find(|s| s.body == SourceBody::Entrypoint)
            .unwrap();
        assert_eq!(entry.type_name, "PetClinicApiApplication");
        assert_eq!(entry.package.to_string(), "com.example");
        assert_eq!(bp.sources().filter(|s| s.body == SourceBody::Entrypoint).count(), 1);
    }

    #[test]
    fn validate_catches_duplicates_and_mismatches() {
        let mut bp = Blueprint::plan(&builder().build().unwrap());
        let first = bp.nodes[0].clone();
        bp.nodes.push(first);
        assert!(matches!(bp.validate(), Err(DomainError::DuplicatePath { .. })));

        let mut bp = Blueprint::plan(&builder().build().unwrap());
        let source = bp.sources().next().unwrap().clone();
        bp.nodes.push(BlueprintNode::File {
            path: RelativePath::new("domain/src/main/java/Wrong.java"),
            content: FileContent::Source(source),
        });
        assert!(matches!(bp.validate(), Err(DomainError::PackageMismatch { .. })));
    }

    #[test]
    fn stub_directories_are_not_repeated() {
        let bp = Blueprint::plan(&builder().build().unwrap());
        let dirs: Vec<_> = bp.directories().map(|d| d.to_slash_string()).collect();
        let unique: HashSet<_> = dirs.iter().collect();
        assert_eq!(dirs.len(), unique.len());
        assert!(dirs.contains(&"infrastructure/src/main/java/com/example/infrastructure/bus".to_string()));
    }
}
