//! Anvil Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Anvil
//! Spring Boot scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            anvil-cli (CLI)              │
//! │   (prompting, config, version lookup)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (ScaffoldService, VersionResolver)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, TemplateRenderer, Metadata)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     anvil-adapters (Infrastructure)     │
//! │ (LocalFilesystem, GradleRenderer, HTTP) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ProjectConfig, Blueprint, Module,     │
//! │   dependency matrix, stub catalog)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use anvil_core::{
//!     application::{ScaffoldService, WritePolicy},
//!     domain::{ApiStyle, DbDriver, ProjectConfig},
//! };
//!
//! // 1. Build a validated configuration
//! let config = ProjectConfig::builder()
//!     .project_name("clinic")
//!     .group_id("com.example")
//!     .java_version("21")
//!     .springboot_version("3.2.0")
//!     .jpa(true)
//!     .db_driver(DbDriver::PostgreSql)
//!     .api_style(ApiStyle::Rest)
//!     .build()?;
//!
//! // 2. Generate through the injected adapters
//! let service = ScaffoldService::new(renderer, filesystem);
//! service.generate(&config, Path::new("."), WritePolicy::FailIfExists)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationReport, ScaffoldService, VersionResolver, WritePolicy,
        ports::{Filesystem, MetadataSource, TemplateRenderer},
    };
    pub use crate::domain::{
        ApiStyle, Blueprint, BlueprintNode, DbDriver, FileContent, Module, ProjectConfig,
        ProjectConfigBuilder, ProjectStructure, VersionCatalog, VersionKind, VersionResolution,
    };
    pub use crate::error::{AnvilError, AnvilResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
