//! Domain value objects: Module, DbDriver, ApiStyle, TypeKind.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Dependency coordinates and stub lists do NOT live here; they are kept in
//! the registries of `dependencies.rs` and `stubs.rs`. This file's only job is
//! to define the types, their string representations, and their parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Module ────────────────────────────────────────────────────────────────────

/// One of the four fixed build units of a generated project.
///
/// Variant order is the logical dependency order:
/// `domain` ← `application` ← `infrastructure` ← `api`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    Domain,
    Application,
    Infrastructure,
    Api,
}

impl Module {
    /// All modules in logical dependency order.
    pub const ALL: [Module; 4] = [
        Module::Domain,
        Module::Application,
        Module::Infrastructure,
        Module::Api,
    ];

    /// The order in which module trees are written to disk.
    ///
    /// Only fixes the file-creation sequence; it says nothing about the
    /// dependency order.
    pub const GENERATION_ORDER: [Module; 4] = [
        Module::Api,
        Module::Application,
        Module::Domain,
        Module::Infrastructure,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Application => "application",
            Self::Infrastructure => "infrastructure",
            Self::Api => "api",
        }
    }

    /// Sub-package appended to the group id for this module's sources.
    ///
    /// The api module lives directly under the group id.
    pub const fn sub_package(&self) -> Option<&'static str> {
        match self {
            Self::Api => None,
            other => Some(other.as_str()),
        }
    }

    /// Project-local modules this module declares a dependency on.
    pub const fn project_dependencies(&self) -> &'static [Module] {
        match self {
            Self::Domain => &[],
            Self::Application => &[Module::Domain],
            Self::Infrastructure => &[Module::Domain, Module::Application],
            Self::Api => &[Module::Application, Module::Infrastructure],
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Module {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "domain" => Ok(Self::Domain),
            "application" | "app" => Ok(Self::Application),
            "infrastructure" | "infra" => Ok(Self::Infrastructure),
            "api" => Ok(Self::Api),
            other => Err(DomainError::UnknownVariant {
                kind: "module",
                value: other.to_string(),
            }),
        }
    }
}

// ── DbDriver ──────────────────────────────────────────────────────────────────

/// A database driver the infrastructure module can depend on.
///
/// Ordering is the rendering order of driver lines in `build.gradle`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum DbDriver {
    #[serde(rename = "postgresql")]
    PostgreSql,
    #[serde(rename = "h2")]
    H2,
    #[serde(rename = "mysql")]
    MySql,
    #[serde(rename = "mongodb")]
    MongoDb,
}

impl DbDriver {
    pub const ALL: [DbDriver; 4] = [
        DbDriver::PostgreSql,
        DbDriver::H2,
        DbDriver::MySql,
        DbDriver::MongoDb,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PostgreSql => "postgresql",
            Self::H2 => "h2",
            Self::MySql => "mysql",
            Self::MongoDb => "mongodb",
        }
    }

    /// Human label, as offered in the interactive prompt.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PostgreSql => "PostgreSQL",
            Self::H2 => "H2",
            Self::MySql => "MySQL",
            Self::MongoDb => "MongoDB",
        }
    }
}

impl fmt::Display for DbDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DbDriver {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgresql" | "postgres" | "pg" => Ok(Self::PostgreSql),
            "h2" => Ok(Self::H2),
            "mysql" => Ok(Self::MySql),
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            other => Err(DomainError::UnknownVariant {
                kind: "database driver",
                value: other.to_string(),
            }),
        }
    }
}

// ── ApiStyle ──────────────────────────────────────────────────────────────────

/// An API surface the api module exposes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ApiStyle {
    #[serde(rename = "rest")]
    Rest,
    #[serde(rename = "graphql")]
    GraphQl,
}

impl ApiStyle {
    pub const ALL: [ApiStyle; 2] = [ApiStyle::Rest, ApiStyle::GraphQl];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::GraphQl => "graphql",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rest => "REST",
            Self::GraphQl => "GraphQL",
        }
    }
}

impl fmt::Display for ApiStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ApiStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rest" => Ok(Self::Rest),
            "graphql" | "gql" => Ok(Self::GraphQl),
            other => Err(DomainError::UnknownVariant {
                kind: "api style",
                value: other.to_string(),
            }),
        }
    }
}

// ── TypeKind ──────────────────────────────────────────────────────────────────

/// The Java declaration a stub file contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    AbstractClass,
    Interface,
}

impl TypeKind {
    /// Declaration keywords placed between `public` and the type name.
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::AbstractClass => "abstract class",
            Self::Interface => "interface",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_orders_are_permutations_of_all() {
        let mut generation = Module::GENERATION_ORDER.to_vec();
        generation.sort();
        assert_eq!(generation, Module::ALL.to_vec());
    }

    #[test]
    fn module_dependencies_point_backwards() {
        for module in Module::ALL {
            for dep in module.project_dependencies() {
                assert!(dep < &module, "{module} depends on later module {dep}");
            }
        }
    }

    #[test]
    fn api_has_no_sub_package() {
        assert_eq!(Module::Api.sub_package(), None);
        assert_eq!(Module::Domain.sub_package(), Some("domain"));
    }

    #[test]
    fn driver_parses_case_insensitively() {
        assert_eq!("PostgreSQL".parse::<DbDriver>().unwrap(), DbDriver::PostgreSql);
        assert_eq!("mongo".parse::<DbDriver>().unwrap(), DbDriver::MongoDb);
        assert!("oracle".parse::<DbDriver>().is_err());
    }

    #[test]
    fn api_style_display_uses_labels() {
        assert_eq!(ApiStyle::GraphQl.to_string(), "GraphQL");
        assert_eq!("REST".parse::<ApiStyle>().unwrap(), ApiStyle::Rest);
    }

    #[test]
    fn type_kind_keywords() {
        assert_eq!(TypeKind::AbstractClass.keyword(), "abstract class");
        assert_eq!(TypeKind::Interface.keyword(), "interface");
    }
}
