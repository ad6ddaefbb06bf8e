//! The `ProjectConfig` aggregate and its builder.
//!
//! A `ProjectConfig` is the fully-resolved, validated description of the
//! project the user wants to generate. Once a `ProjectConfig` exists it is
//! guaranteed consistent and is never mutated again.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::collections::BTreeSet;
use std::fmt;

use crate::domain::{
    error::DomainError,
    naming::{self, JavaPackage},
    value_objects::{ApiStyle, DbDriver},
};

// ── Aggregate root ────────────────────────────────────────────────────────────

/// Validated input of one generation pass.
///
/// Invariants guaranteed on construction:
/// - `project_name` yields a valid directory name and Java type name
/// - `group_id` is a valid dot-separated Java package
/// - both versions are non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    project_name: String,
    group_id: JavaPackage,
    java_version: String,
    springboot_version: String,
    jpa: bool,
    db_drivers: BTreeSet<DbDriver>,
    lombok: bool,
    mapstruct: bool,
    api_styles: BTreeSet<ApiStyle>,
}

impl ProjectConfig {
    /// Start building a new `ProjectConfig`.
    pub fn builder() -> ProjectConfigBuilder {
        ProjectConfigBuilder::new()
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }
    pub fn group_id(&self) -> &JavaPackage {
        &self.group_id
    }
    pub fn java_version(&self) -> &str {
        &self.java_version
    }
    pub fn springboot_version(&self) -> &str {
        &self.springboot_version
    }
    pub const fn jpa(&self) -> bool {
        self.jpa
    }
    pub const fn lombok(&self) -> bool {
        self.lombok
    }
    pub const fn mapstruct(&self) -> bool {
        self.mapstruct
    }

    /// Drivers as selected, regardless of `jpa`.
    pub fn db_drivers(&self) -> &BTreeSet<DbDriver> {
        &self.db_drivers
    }

    /// Drivers that actually reach the build: empty unless `jpa` is enabled.
    pub fn effective_db_drivers(&self) -> impl Iterator<Item = DbDriver> + '_ {
        self.db_drivers.iter().copied().filter(|_| self.jpa)
    }

    pub fn api_styles(&self) -> &BTreeSet<ApiStyle> {
        &self.api_styles
    }

    pub fn has_api_style(&self, style: ApiStyle) -> bool {
        self.api_styles.contains(&style)
    }

    /// `<project>-api`, the generated root directory and Gradle root name.
    pub fn root_dir_name(&self) -> String {
        naming::root_dir_name(&self.project_name)
    }

    /// Name of the generated Spring Boot application class.
    pub fn entrypoint_class_name(&self) -> String {
        naming::entrypoint_class_name(&self.project_name)
    }

    /// Re-check every invariant.
    ///
    /// Called automatically by the builder. Available for re-validation after
    /// deserialization or external construction.
    pub fn validate(&self) -> Result<(), DomainError> {
        naming::validate_project_name(&self.project_name)?;
        validate_version("java", &self.java_version)?;
        validate_version("spring boot", &self.springboot_version)?;
        Ok(())
    }
}

impl fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) java {} / spring boot {}",
            self.project_name, self.group_id, self.java_version, self.springboot_version
        )
    }
}

fn validate_version(kind: &'static str, version: &str) -> Result<(), DomainError> {
    if version.trim().is_empty() {
        return Err(DomainError::InvalidVersion {
            kind,
            version: version.to_string(),
            reason: "version cannot be empty".into(),
        });
    }
    if version.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
        return Err(DomainError::InvalidVersion {
            kind,
            version: version.to_string(),
            reason: "version cannot contain whitespace or quotes".into(),
        });
    }
    Ok(())
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`ProjectConfig`].
///
/// Flags default to `false` and sets to empty; name, group id and both
/// versions are required.
#[derive(Debug, Clone, Default)]
pub struct ProjectConfigBuilder {
    project_name: Option<String>,
    group_id: Option<String>,
    java_version: Option<String>,
    springboot_version: Option<String>,
    jpa: bool,
    db_drivers: BTreeSet<DbDriver>,
    lombok: bool,
    mapstruct: bool,
    api_styles: BTreeSet<ApiStyle>,
}

impl ProjectConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    pub fn java_version(mut self, version: impl Into<String>) -> Self {
        self.java_version = Some(version.into());
        self
    }

    pub fn springboot_version(mut self, version: impl Into<String>) -> Self {
        self.springboot_version = Some(version.into());
        self
    }

    pub fn jpa(mut self, enabled: bool) -> Self {
        self.jpa = enabled;
        self
    }

    pub fn db_driver(mut self, driver: DbDriver) -> Self {
        self.db_drivers.insert(driver);
        self
    }

    pub fn db_drivers(mut self, drivers: impl IntoIterator<Item = DbDriver>) -> Self {
        self.db_drivers.extend(drivers);
        self
    }

    pub fn lombok(mut self, enabled: bool) -> Self {
        self.lombok = enabled;
        self
    }

    pub fn mapstruct(mut self, enabled: bool) -> Self {
        self.mapstruct = enabled;
        self
    }

    pub fn api_style(mut self, style: ApiStyle) -> Self {
        self.api_styles.insert(style);
        self
    }

    pub fn api_styles(mut self, styles: impl IntoIterator<Item = ApiStyle>) -> Self {
        self.api_styles.extend(styles);
        self
    }

    /// Build and validate the `ProjectConfig`.
    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        let project_name = self
            .project_name
            .ok_or(DomainError::MissingRequiredField {
                field: "project name",
            })?
            .trim()
            .to_string();
        let group_id = self.group_id.ok_or(DomainError::MissingRequiredField {
            field: "group id",
        })?;
        let group_id = JavaPackage::parse(group_id.trim())?;
        let java_version = self.java_version.ok_or(DomainError::MissingRequiredField {
            field: "java version",
        })?;
        let springboot_version =
            self.springboot_version
                .ok_or(DomainError::MissingRequiredField {
                    field: "spring boot version",
                })?;

        let config = ProjectConfig {
            project_name,
            group_id,
            java_version: java_version.trim().to_string(),
            springboot_version: springboot_version.trim().to_string(),
            jpa: self.jpa,
            db_drivers: self.db_drivers,
            lombok: self.lombok,
            mapstruct: self.mapstruct,
            api_styles: self.api_styles,
        };

        config.validate()?;
        Ok(config)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
