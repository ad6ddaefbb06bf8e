//! Version metadata sources.

mod http;

use anvil_core::{
    application::{ApplicationError, ports::MetadataSource},
    domain::InitializrMetadata,
    error::AnvilResult,
};

pub use http::{DEFAULT_METADATA_URL, DEFAULT_TIMEOUT_SECS, HttpMetadataSource, MetadataError};

/// Source used for offline runs; every fetch fails immediately.
#[derive(Debug, Clone, Default)]
pub struct UnavailableMetadataSource {
    reason: String,
}

impl UnavailableMetadataSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn offline() -> Self {
        Self::new("offline mode")
    }
}

impl MetadataSource for UnavailableMetadataSource {
    fn fetch(&self) -> AnvilResult<InitializrMetadata> {
        Err(ApplicationError::MetadataFetch {
            reason: self.reason.clone(),
        }
        .into())
    }
}
