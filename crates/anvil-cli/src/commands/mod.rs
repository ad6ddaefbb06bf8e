//! One module per subcommand.

pub mod completions;
pub mod config;
pub mod init;
pub mod new;
pub mod versions;

use std::time::Duration;

use anvil_adapters::{HttpMetadataSource, UnavailableMetadataSource};
use anvil_core::application::{MetadataSource, VersionResolver};
use tracing::debug;

use crate::config::MetadataConfig;

/// Resolver over start.spring.io, or over nothing when offline.
///
/// A client that cannot be built degrades to the built-in catalogs like any
/// other metadata failure.
pub(crate) fn version_resolver(offline: bool, metadata: &MetadataConfig) -> VersionResolver {
    let source: Box<dyn MetadataSource> = if offline {
        debug!("Offline, skipping metadata lookup");
        Box::new(UnavailableMetadataSource::offline())
    } else {
        match HttpMetadataSource::new(
            metadata.url.as_str(),
            Duration::from_secs(metadata.timeout_secs),
        ) {
            Ok(source) => Box::new(source),
            Err(e) => Box::new(UnavailableMetadataSource::new(e.to_string())),
        }
    };
    VersionResolver::new(source)
}
