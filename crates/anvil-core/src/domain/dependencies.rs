//! Build dependency registry.
//!
//! Every Gradle plugin, dependency coordinate and compiler flag a generated
//! project can contain is listed exactly once in this file, together with the
//! flag that gates it. Build descriptors are derived from these tables; the
//! renderer never decides what goes into a build file.
//!
//! # Adding a dependency
//!
//! 1. Add a [`DependencyDef`] to the table of the section it belongs to
//! 2. Pick the [`Gate`] that switches it on
//! 3. Nothing else changes; descriptors and renderers pick it up

use crate::domain::entities::ProjectConfig;
use crate::domain::value_objects::{DbDriver, Module};

pub const PROJECT_VERSION: &str = "0.0.1-SNAPSHOT";
pub const DEPENDENCY_MANAGEMENT_VERSION: &str = "1.1.5";
pub const LOMBOK: &str = "org.projectlombok:lombok:1.18.42";
pub const MAPSTRUCT: &str = "org.mapstruct:mapstruct:1.5.5.Final";
pub const MAPSTRUCT_PROCESSOR: &str = "org.mapstruct:mapstruct-processor:1.5.5.Final";
pub const BOOT_BOM: &str = "org.springframework.boot:spring-boot-dependencies";

const BOOT_PLUGIN: &str = "org.springframework.boot";
const DEPENDENCY_MANAGEMENT_PLUGIN: &str = "io.spring.dependency-management";

// ── Vocabulary ───────────────────────────────────────────────────────────────

/// Gradle dependency configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Implementation,
    CompileOnly,
    AnnotationProcessor,
    TestCompileOnly,
    TestAnnotationProcessor,
    RuntimeOnly,
}

impl Scope {
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Implementation => "implementation",
            Self::CompileOnly => "compileOnly",
            Self::AnnotationProcessor => "annotationProcessor",
            Self::TestCompileOnly => "testCompileOnly",
            Self::TestAnnotationProcessor => "testAnnotationProcessor",
            Self::RuntimeOnly => "runtimeOnly",
        }
    }
}

/// What a registry entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// External `group:name[:version]` coordinate.
    Coordinate(&'static str),
    /// Another module of the generated project.
    Project(Module),
    /// The Spring Boot BOM, pinned to the selected framework version.
    BootPlatform,
}

/// Condition under which a registry entry is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    Lombok,
    MapStruct,
    Jpa,
    /// Only when JPA is enabled and this driver is selected.
    Driver(DbDriver),
}

impl Gate {
    pub fn is_open(&self, config: &ProjectConfig) -> bool {
        match self {
            Self::Always => true,
            Self::Lombok => config.lombok(),
            Self::MapStruct => config.mapstruct(),
            Self::Jpa => config.jpa(),
            Self::Driver(driver) => config.effective_db_drivers().any(|d| d == *driver),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DependencyDef {
    pub scope: Scope,
    pub artifact: Artifact,
    pub gate: Gate,
}

/// How a plugin line pins its version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginVersion {
    /// Version comes from the root project.
    Inherited,
    Fixed(&'static str),
    /// Pinned to the selected Spring Boot version.
    Boot,
}

#[derive(Debug, Clone, Copy)]
pub struct PluginDef {
    pub id: &'static str,
    pub version: PluginVersion,
    /// `false` renders `apply false`.
    pub apply: bool,
}

/// Build rules for one module.
#[derive(Debug, Clone, Copy)]
pub struct ModuleDef {
    pub module: Module,
    /// Empty means the module has no `plugins {}` block.
    pub plugins: &'static [PluginDef],
    pub dependencies: &'static [DependencyDef],
    pub jar_enabled: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct CompilerArgDef {
    pub arg: &'static str,
    pub gate: Gate,
}

// ── Resolved values ──────────────────────────────────────────────────────────

/// A dependency line with every placeholder filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub scope: Scope,
    pub notation: Notation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notation {
    Coordinate(String),
    Project(Module),
    Platform(String),
}

impl Dependency {
    /// The coordinate string, if this is an external dependency.
    pub fn coordinate(&self) -> Option<&str> {
        match &self.notation {
            Notation::Coordinate(c) | Notation::Platform(c) => Some(c),
            Notation::Project(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugin {
    pub id: &'static str,
    pub version: Option<String>,
    pub apply: bool,
}

// ── Registry ─────────────────────────────────────────────────────────────────

const fn dep(scope: Scope, artifact: Artifact, gate: Gate) -> DependencyDef {
    DependencyDef {
        scope,
        artifact,
        gate,
    }
}

const fn plugin(id: &'static str, version: PluginVersion, apply: bool) -> PluginDef {
    PluginDef { id, version, apply }
}

use Artifact::{BootPlatform, Coordinate, Project};
use Scope::*;

/// Plugins declared by the root `build.gradle`.
pub static ROOT_PLUGINS: &[PluginDef] = &[
    plugin("java", PluginVersion::Inherited, true),
    plugin(BOOT_PLUGIN, PluginVersion::Boot, false),
    plugin(
        DEPENDENCY_MANAGEMENT_PLUGIN,
        PluginVersion::Fixed(DEPENDENCY_MANAGEMENT_VERSION),
        true,
    ),
];

/// Plugins applied to every module from the root `subprojects {}` block.
pub static SUBPROJECT_PLUGINS: &[&str] = &["java", DEPENDENCY_MANAGEMENT_PLUGIN];

/// Dependencies in the root `subprojects { dependencies {} }` block.
pub static SHARED_DEPENDENCIES: &[DependencyDef] = &[
    dep(CompileOnly, Coordinate(LOMBOK), Gate::Lombok),
    dep(AnnotationProcessor, Coordinate(LOMBOK), Gate::Lombok),
    dep(TestCompileOnly, Coordinate(LOMBOK), Gate::Lombok),
    dep(TestAnnotationProcessor, Coordinate(LOMBOK), Gate::Lombok),
    dep(Implementation, Coordinate(MAPSTRUCT), Gate::MapStruct),
    dep(AnnotationProcessor, Coordinate(MAPSTRUCT_PROCESSOR), Gate::MapStruct),
];

pub static COMPILER_ARGS: &[CompilerArgDef] = &[CompilerArgDef {
    arg: "-Amapstruct.defaultComponentModel=spring",
    gate: Gate::MapStruct,
}];

/// Per-module build rules, in logical module order.
pub static MODULE_REGISTRY: &[ModuleDef] = &[
    ModuleDef {
        module: Module::Domain,
        plugins: &[],
        dependencies: &[],
        jar_enabled: true,
    },
    ModuleDef {
        module: Module::Application,
        plugins: &[],
        dependencies: &[dep(Implementation, Project(Module::Domain), Gate::Always)],
        jar_enabled: true,
    },
    ModuleDef {
        module: Module::Infrastructure,
        plugins: &[
            plugin("java", PluginVersion::Inherited, true),
            plugin(DEPENDENCY_MANAGEMENT_PLUGIN, PluginVersion::Inherited, true),
        ],
        dependencies: &[
            dep(Implementation, BootPlatform, Gate::Always),
            dep(Implementation, Project(Module::Domain), Gate::Always),
            dep(Implementation, Project(Module::Application), Gate::Always),
            dep(
                Implementation,
                Coordinate("org.springframework.boot:spring-boot-starter-data-jpa"),
                Gate::Jpa,
            ),
            dep(
                RuntimeOnly,
                Coordinate("org.postgresql:postgresql"),
                Gate::Driver(DbDriver::PostgreSql),
            ),
            dep(
                RuntimeOnly,
                Coordinate("com.h2database:h2"),
                Gate::Driver(DbDriver::H2),
            ),
            dep(
                RuntimeOnly,
                Coordinate("mysql:mysql-connector-java:8.0.33"),
                Gate::Driver(DbDriver::MySql),
            ),
            dep(
                Implementation,
                Coordinate("org.springframework.boot:spring-boot-starter-data-mongodb"),
                Gate::Driver(DbDriver::MongoDb),
            ),
        ],
        jar_enabled: true,
    },
    ModuleDef {
        module: Module::Api,
        plugins: &[
            plugin("java", PluginVersion::Inherited, true),
            plugin(BOOT_PLUGIN, PluginVersion::Inherited, true),
            plugin(DEPENDENCY_MANAGEMENT_PLUGIN, PluginVersion::Inherited, true),
        ],
        dependencies: &[
            dep(Implementation, Project(Module::Application), Gate::Always),
            dep(Implementation, Project(Module::Infrastructure), Gate::Always),
            dep(
                Implementation,
                Coordinate("org.springframework.boot:spring-boot-starter-web"),
                Gate::Always,
            ),
            dep(
                Implementation,
                Coordinate("org.springframework.boot:spring-boot-starter-graphql"),
                Gate::Always,
            ),
            dep(
                Implementation,
                Coordinate("com.fasterxml.jackson.core:jackson-databind"),
                Gate::Always,
            ),
        ],
        jar_enabled: false,
    },
];

// ── Lookup ───────────────────────────────────────────────────────────────────

/// Build rules for `module`.
pub fn find_module(module: Module) -> &'static ModuleDef {
    MODULE_REGISTRY
        .iter()
        .find(|def| def.module == module)
        .unwrap_or_else(|| unreachable!("module {module} missing from MODULE_REGISTRY"))
}

/// Resolve a dependency table against a configuration.
pub fn resolve_dependencies(table: &[DependencyDef], config: &ProjectConfig) -> Vec<Dependency> {
    table
        .iter()
        .filter(|def| def.gate.is_open(config))
        .map(|def| Dependency {
            scope: def.scope,
            notation: match def.artifact {
                Coordinate(c) => Notation::Coordinate(c.to_string()),
                Project(m) => Notation::Project(m),
                BootPlatform => {
                    Notation::Platform(format!("{BOOT_BOM}:{}", config.springboot_version()))
                }
            },
        })
        .collect()
}

/// Resolve a plugin table against a configuration.
pub fn resolve_plugins(table: &[PluginDef], config: &ProjectConfig) -> Vec<Plugin> {
    table
        .iter()
        .map(|def| Plugin {
            id: def.id,
            version: match def.version {
                PluginVersion::Inherited => None,
                PluginVersion::Fixed(v) => Some(v.to_string()),
                PluginVersion::Boot => Some(config.springboot_version().to_string()),
            },
            apply: def.apply,
        })
        .collect()
}

pub fn resolve_compiler_args(config: &ProjectConfig) -> Vec<&'static str> {
    COMPILER_ARGS
        .iter()
        .filter(|def| def.gate.is_open(config))
        .map(|def| def.arg)
        .collect()
}

// ── Registry integrity (checked in tests) ────────────────────────────────────

/// Panics if the registry disagrees with the module model.
#[doc(hidden)]
pub fn assert_registry_integrity() {
    for module in Module::ALL {
        let defs: Vec<_> = MODULE_REGISTRY.iter().filter(|d| d.module == module).collect();
        assert_eq!(defs.len(), 1, "module {module} must be registered exactly once");

        let declared: Vec<Module> = defs[0]
            .dependencies
            .iter()
            .filter_map(|d| match d.artifact {
                Project(m) => Some(m),
                _ => None,
            })
            .collect();
        assert_eq!(
            declared,
            module.project_dependencies(),
            "project dependencies of {module} disagree with Module::project_dependencies"
        );
    }

    for driver in DbDriver::ALL {
        let count = MODULE_REGISTRY
            .iter()
            .flat_map(|d| d.dependencies)
            .filter(|d| d.gate == Gate::Driver(driver))
            .count();
        assert_eq!(count, 1, "driver {driver} must map to exactly one dependency");
    }
}
