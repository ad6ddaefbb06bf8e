//! Typed build descriptors.
//!
//! These are the data behind `settings.gradle` and each `build.gradle`.
//! They hold resolved plugins and dependencies; turning them into Groovy is
//! the renderer's job.

use crate::domain::dependencies::{
    self, Dependency, Plugin, PROJECT_VERSION, ROOT_PLUGINS, SHARED_DEPENDENCIES,
    SUBPROJECT_PLUGINS,
};
use crate::domain::entities::ProjectConfig;
use crate::domain::value_objects::Module;

/// Multi-module settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDescriptor {
    pub root_project_name: String,
    /// Always the four fixed modules, in logical order.
    pub modules: Vec<Module>,
}

impl SettingsDescriptor {
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self {
            root_project_name: config.root_dir_name(),
            modules: Module::ALL.to_vec(),
        }
    }
}

/// Root build file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootBuildDescriptor {
    pub plugins: Vec<Plugin>,
    pub group: String,
    pub version: &'static str,
    pub subproject_plugins: Vec<&'static str>,
    pub java_version: String,
    /// Applied to every module; empty when no shared library is selected.
    pub shared_dependencies: Vec<Dependency>,
    pub compiler_args: Vec<&'static str>,
}

impl RootBuildDescriptor {
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self {
            plugins: dependencies::resolve_plugins(ROOT_PLUGINS, config),
            group: config.group_id().to_string(),
            version: PROJECT_VERSION,
            subproject_plugins: SUBPROJECT_PLUGINS.to_vec(),
            java_version: config.java_version().to_string(),
            shared_dependencies: dependencies::resolve_dependencies(SHARED_DEPENDENCIES, config),
            compiler_args: dependencies::resolve_compiler_args(config),
        }
    }
}

/// Build file of one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleBuildDescriptor {
    pub module: Module,
    pub plugins: Vec<Plugin>,
    pub dependencies: Vec<Dependency>,
    pub jar_enabled: bool,
}

impl ModuleBuildDescriptor {
    pub fn from_config(module: Module, config: &ProjectConfig) -> Self {
        let def = dependencies::find_module(module);
        Self {
            module,
            plugins: dependencies::resolve_plugins(def.plugins, config),
            dependencies: dependencies::resolve_dependencies(def.dependencies, config),
            jar_enabled: def.jar_enabled,
        }
    }

    /// Project-local modules this descriptor depends on.
    pub fn project_dependencies(&self) -> impl Iterator<Item = Module> + '_ {
        self.dependencies.iter().filter_map(|d| match d.notation {
            dependencies::Notation::Project(m) => Some(m),
            _ => None,
        })
    }
}
