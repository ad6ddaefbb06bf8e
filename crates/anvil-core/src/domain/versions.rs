//! Runtime and framework version catalogs.
//!
//! A catalog is an ordered list of candidates plus a default. It comes either
//! from the remote metadata document or from the built-in fallback lists;
//! [`VersionResolution`] records which.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Qualifier some metadata documents append to framework versions.
pub const RELEASE_SUFFIX: &str = ".RELEASE";

const JAVA_FALLBACK: &[&str] = &["25", "21", "17", "11", "8"];
const JAVA_FALLBACK_DEFAULT: &str = "25";
const BOOT_FALLBACK: &[&str] = &["3.2.0", "3.1.5", "3.0.13", "2.7.18"];
const BOOT_FALLBACK_DEFAULT: &str = "3.2.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionKind {
    Java,
    SpringBoot,
}

impl VersionKind {
    pub const ALL: [VersionKind; 2] = [VersionKind::Java, VersionKind::SpringBoot];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Java => "Java",
            Self::SpringBoot => "Spring Boot",
        }
    }

    /// Built-in catalog used when the metadata service is unavailable.
    pub fn fallback(&self) -> VersionCatalog {
        let (candidates, default) = match self {
            Self::Java => (JAVA_FALLBACK, JAVA_FALLBACK_DEFAULT),
            Self::SpringBoot => (BOOT_FALLBACK, BOOT_FALLBACK_DEFAULT),
        };
        VersionCatalog {
            candidates: candidates.iter().map(|s| s.to_string()).collect(),
            default: default.to_string(),
        }
    }
}

impl fmt::Display for VersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered version candidates and the one to preselect.
///
/// Invariant: `candidates` is non-empty and contains `default`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCatalog {
    candidates: Vec<String>,
    default: String,
}

impl VersionCatalog {
    /// Build a catalog, dropping blank and repeated candidates.
    ///
    /// A default that is not among the candidates is replaced by the first
    /// candidate.
    pub fn new(
        candidates: impl IntoIterator<Item = String>,
        default: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let mut unique: Vec<String> = Vec::new();
        for candidate in candidates {
            let candidate = candidate.trim().to_string();
            if !candidate.is_empty() && !unique.contains(&candidate) {
                unique.push(candidate);
            }
        }
        let Some(first) = unique.first().cloned() else {
            return Err(DomainError::InvalidMetadata(
                "version list is empty".into(),
            ));
        };
        let default = default.into();
        let default = if unique.contains(&default) { default } else { first };
        Ok(Self {
            candidates: unique,
            default,
        })
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn default_version(&self) -> &str {
        &self.default
    }

    /// Position of the default, for preselecting it in a prompt.
    pub fn default_index(&self) -> usize {
        self.candidates
            .iter()
            .position(|c| *c == self.default)
            .unwrap_or(0)
    }

    pub fn contains(&self, version: &str) -> bool {
        self.candidates.iter().any(|c| c == version)
    }
}

/// Outcome of resolving one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionResolution {
    Remote(VersionCatalog),
    Fallback {
        catalog: VersionCatalog,
        reason: String,
    },
}

impl VersionResolution {
    pub fn catalog(&self) -> &VersionCatalog {
        match self {
            Self::Remote(catalog) | Self::Fallback { catalog, .. } => catalog,
        }
    }

    pub fn into_catalog(self) -> VersionCatalog {
        match self {
            Self::Remote(catalog) | Self::Fallback { catalog, .. } => catalog,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn source_label(&self) -> &'static str {
        match self {
            Self::Remote(_) => "remote",
            Self::Fallback { .. } => "fallback",
        }
    }
}

// ── Metadata document ─────────────────────────────────────────────────────────

/// The subset of the Spring Initializr client metadata this tool reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializrMetadata {
    pub boot_version: VersionField,
    pub java_version: VersionField,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionField {
    #[serde(default)]
    pub default: String,
    #[serde(default)]
    pub values: Vec<VersionValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionValue {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl InitializrMetadata {
    /// Extract the catalog for `kind`.
    ///
    /// Framework ids lose their `.RELEASE` qualifier.
    pub fn catalog(&self, kind: VersionKind) -> Result<VersionCatalog, DomainError> {
        let (field, strip) = match kind {
            VersionKind::Java => (&self.java_version, false),
            VersionKind::SpringBoot => (&self.boot_version, true),
        };
        let normalize = |id: &str| -> String {
            if strip {
                id.strip_suffix(RELEASE_SUFFIX).unwrap_or(id).to_string()
            } else {
                id.to_string()
            }
        };
        VersionCatalog::new(
            field.values.iter().map(|v| normalize(&v.id)),
            normalize(&field.default),
        )
        .map_err(|_| DomainError::InvalidMetadata(format!("no {} versions listed", kind.label())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "bootVersion": {
            "type": "single-select",
            "default": "3.2.0.RELEASE",
            "values": [
                {"id": "3.3.0-SNAPSHOT", "name": "3.3.0 (SNAPSHOT)"},
                {"id": "3.2.0.RELEASE", "name": "3.2.0"},
                {"id": "3.1.5.RELEASE", "name": "3.1.5"}
            ]
        },
        "javaVersion": {
            "type": "single-select",
            "default": "17",
            "values": [{"id": "21"}, {"id": "17"}]
        },
        "packaging": {"default": "jar"}
    }"#;

    #[test]
    fn fallbacks_match_builtin_lists() {
        let java = VersionKind::Java.fallback();
        assert_eq!(java.candidates(), ["25", "21", "17", "11", "8"]);
        assert_eq!(java.default_version(), "25");
        let boot = VersionKind::SpringBoot.fallback();
        assert_eq!(boot.candidates(), ["3.2.0", "3.1.5", "3.0.13", "2.7.18"]);
        assert_eq!(boot.default_version(), "3.2.0");
    }

    #[test]
    fn metadata_strips_release_qualifier_for_boot_only() {
        let meta: InitializrMetadata = serde_json::from_str(SAMPLE).unwrap();
        let boot = meta.catalog(VersionKind::SpringBoot).unwrap();
        assert_eq!(boot.candidates(), ["3.3.0-SNAPSHOT", "3.2.0", "3.1.5"]);
        assert_eq!(boot.default_version(), "3.2.0");
        assert_eq!(boot.default_index(), 1);

        let java = meta.catalog(VersionKind::Java).unwrap();
        assert_eq!(java.candidates(), ["21", "17"]);
        assert_eq!(java.default_version(), "17");
    }

    #[test]
    fn empty_values_are_invalid_metadata() {
        let meta: InitializrMetadata = serde_json::from_str(
            r#"{"bootVersion": {"default": "x", "values": []}, "javaVersion": {"values": [{"id": "21"}]}}"#,
        )
        .unwrap();
        assert!(matches!(
            meta.catalog(VersionKind::SpringBoot),
            Err(DomainError::InvalidMetadata(_))
        ));
        assert_eq!(
            meta.catalog(VersionKind::Java).unwrap().default_version(),
            "21"
        );
    }

    #[test]
    fn unknown_default_falls_back_to_first_candidate() {
        let catalog = VersionCatalog::new(vec!["21".into(), "21".into(), " ".into()], "99").unwrap();
        assert_eq!(catalog.candidates(), ["21"]);
        assert_eq!(catalog.default_version(), "21");
    }

    #[test]
    fn resolution_exposes_catalog_and_source() {
        let res = VersionResolution::Fallback {
            catalog: VersionKind::Java.fallback(),
            reason: "offline".into(),
        };
        assert!(res.is_fallback());
        assert_eq!(res.source_label(), "fallback");
        assert_eq!(res.catalog().default_version(), "25");
    }
}
