//! Version resolution with a built-in fallback.
//!
//! Resolution never fails: any error from the metadata source is logged and
//! replaced by the static catalog for the requested kind.

use tracing::{debug, instrument, warn};

use crate::{
    application::ports::MetadataSource,
    domain::{VersionKind, VersionResolution},
    error::AnvilResult,
};

/// Both catalogs a generation pass needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersions {
    pub java: VersionResolution,
    pub spring_boot: VersionResolution,
}

impl ResolvedVersions {
    pub fn get(&self, kind: VersionKind) -> &VersionResolution {
        match kind {
            VersionKind::Java => &self.java,
            VersionKind::SpringBoot => &self.spring_boot,
        }
    }
}

pub struct VersionResolver {
    source: Box<dyn MetadataSource>,
}

impl VersionResolver {
    pub fn new(source: Box<dyn MetadataSource>) -> Self {
        Self { source }
    }

    /// One fetch, no retries; falls back on any failure.
    #[instrument(skip(self))]
    pub fn resolve(&self, kind: VersionKind) -> VersionResolution {
        match self.fetch_catalog(kind) {
            Ok(resolution) => {
                debug!(
                    default = resolution.catalog().default_version(),
                    candidates = resolution.catalog().candidates().len(),
                    "Resolved versions from metadata service"
                );
                resolution
            }
            Err(e) => {
                warn!(error = %e, "Could not fetch {} versions, using built-in defaults", kind);
                VersionResolution::Fallback {
                    catalog: kind.fallback(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Resolve runtime then framework versions, sequentially.
    pub fn resolve_all(&self) -> ResolvedVersions {
        let java = self.resolve(VersionKind::Java);
        let spring_boot = self.resolve(VersionKind::SpringBoot);
        ResolvedVersions { java, spring_boot }
    }

    fn fetch_catalog(&self, kind: VersionKind) -> AnvilResult<VersionResolution> {
        let metadata = self.source.fetch()?;
        let catalog = metadata.catalog(kind)?;
        Ok(VersionResolution::Remote(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockMetadataSource};
    use crate::domain::versions::{InitializrMetadata, VersionField, VersionValue};

    fn field(default: &str, ids: &[&str]) -> VersionField {
        VersionField {
            default: default.into(),
            values: ids
                .iter()
                .map(|id| VersionValue {
                    id: id.to_string(),
                    name: None,
                })
                .collect(),
        }
    }

    fn metadata() -> InitializrMetadata {
        InitializrMetadata {
            boot_version: field("3.3.1.RELEASE", &["3.3.1.RELEASE", "3.2.7.RELEASE"]),
            java_version: field("21", &["22", "21", "17"]),
        }
    }

    #[test]
    fn remote_catalog_is_used_when_fetch_succeeds() {
        let mut source = MockMetadataSource::new();
        source.expect_fetch().times(2).returning(|| Ok(metadata()));

        let versions = VersionResolver::new(Box::new(source)).resolve_all();
        assert!(!versions.java.is_fallback());
        assert_eq!(versions.java.catalog().default_version(), "21");
        assert_eq!(
            versions.spring_boot.catalog().candidates(),
            ["3.3.1", "3.2.7"]
        );
    }

    #[test]
    fn network_failure_falls_back_without_error() {
        let mut source = MockMetadataSource::new();
        source.expect_fetch().times(1).returning(|| {
            Err(ApplicationError::MetadataFetch {
                reason: "connection refused".into(),
            }
            .into())
        });

        let resolution = VersionResolver::new(Box::new(source)).resolve(VersionKind::SpringBoot);
        match resolution {
            VersionResolution::Fallback { catalog, reason } => {
                assert_eq!(catalog, VersionKind::SpringBoot.fallback());
                assert!(reason.contains("connection refused"));
            }
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[test]
    fn malformed_payload_falls_back() {
        let mut source = MockMetadataSource::new();
        source.expect_fetch().returning(|| {
            let mut meta = metadata();
            meta.java_version.values.clear();
            Ok(meta)
        });

        let resolver = VersionResolver::new(Box::new(source));
        let java = resolver.resolve(VersionKind::Java);
        assert!(java.is_fallback());
        assert_eq!(java.catalog().default_version(), "25");
        assert!(!resolver.resolve(VersionKind::SpringBoot).is_fallback());
    }
}
