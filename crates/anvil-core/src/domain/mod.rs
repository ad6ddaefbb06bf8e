//! Core domain layer for Anvil.
//!
//! Pure generation rules: configuration, naming, the dependency and stub
//! registries, and the blueprint that ties them into a file tree. All I/O and
//! text rendering happens behind the ports of the application layer.
//!
//! - **No I/O**: no filesystem, network or clock access
//! - **No logging**: observability belongs to the outer layers
//! - **Immutable values**: everything here is `Clone + PartialEq`

pub mod dependencies;
pub mod entities;
pub mod error;
pub mod naming;
pub mod stubs;
pub mod value_objects;
pub mod versions;

mod validation;

pub use entities::{
    Blueprint, BlueprintNode, FileContent, ModuleBuildDescriptor, ProjectConfig,
    ProjectConfigBuilder, RootBuildDescriptor, SettingsDescriptor, SourceBody, SourceFile,
    common::RelativePath,
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
};

pub use error::{DomainError, ErrorCategory};
pub use naming::JavaPackage;
pub use validation::DomainValidator;
pub use value_objects::{ApiStyle, DbDriver, Module, TypeKind};
pub use versions::{InitializrMetadata, VersionCatalog, VersionKind, VersionResolution};

#[cfg(test)]
mod tests {
    use super::*;

    fn clinic() -> ProjectConfig {
        ProjectConfig::builder()
            .project_name("clinic")
            .group_id("com.example")
            .java_version("21")
            .springboot_version("3.2.0")
            .jpa(true)
            .db_driver(DbDriver::PostgreSql)
            .lombok(true)
            .mapstruct(true)
            .api_style(ApiStyle::Rest)
            .build()
            .unwrap()
    }

    #[test]
    fn validator_accepts_planned_clinic() {
        let config = clinic();
        DomainValidator::validate_config(&config).unwrap();
        let blueprint = Blueprint::plan(&config);
        DomainValidator::validate_blueprint(&blueprint).unwrap();
    }

    #[test]
    fn clinic_infrastructure_has_jpa_and_postgres() {
        let blueprint = Blueprint::plan(&clinic());
        let Some(FileContent::ModuleBuild(infra)) =
            blueprint.file("infrastructure/build.gradle")
        else {
            panic!("infrastructure build file missing");
        };
        let coords: Vec<_> = infra
            .dependencies
            .iter()
            .filter_map(|d| d.coordinate())
            .collect();
        assert!(coords.contains(&"org.springframework.boot:spring-boot-starter-data-jpa"));
        assert!(coords.contains(&"org.postgresql:postgresql"));
        assert!(!coords.contains(&"com.h2database:h2"));
    }

    #[test]
    fn clinic_has_rest_controller_only() {
        let blueprint = Blueprint::plan(&clinic());
        let names: Vec<_> = blueprint.sources().map(|s| s.type_name.as_str()).collect();
        assert!(names.contains(&"PatientRestController"));
        assert!(!names.contains(&"PatientQueryResolver"));
        assert!(names.contains(&"ClinicApiApplication"));
    }

    #[test]
    fn empty_structure_fails_validation() {
        let structure = ProjectStructure::new("/tmp/clinic-api");
        assert!(DomainValidator::validate_project_structure(&structure).is_err());
    }
}
