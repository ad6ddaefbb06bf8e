pub mod blueprint;
pub mod build_descriptor;
pub mod common;
pub mod project_config;
pub mod project_structure;

pub use crate::domain::DomainError;
pub use blueprint::{Blueprint, BlueprintNode, FileContent, SourceBody, SourceFile};
pub use build_descriptor::{ModuleBuildDescriptor, RootBuildDescriptor, SettingsDescriptor};
pub use project_config::{ProjectConfig, ProjectConfigBuilder};
pub use project_structure::ProjectStructure;
