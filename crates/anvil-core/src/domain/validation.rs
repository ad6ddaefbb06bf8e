use crate::domain::{
    entities::{Blueprint, ProjectConfig, ProjectStructure},
    error::DomainError,
};

/// Centralized domain validation.
///
/// The generation service calls these in order before anything is written.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_config(config: &ProjectConfig) -> Result<(), DomainError> {
        config.validate()
    }

    pub fn validate_blueprint(blueprint: &Blueprint) -> Result<(), DomainError> {
        blueprint.validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
