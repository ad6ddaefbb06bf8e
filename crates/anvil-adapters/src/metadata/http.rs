//! Spring Initializr metadata client using reqwest.

use std::time::Duration;

use anvil_core::{
    application::{ApplicationError, ports::MetadataSource},
    domain::InitializrMetadata,
    error::AnvilResult,
};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use thiserror::Error;
use tracing::{debug, instrument};

pub const DEFAULT_METADATA_URL: &str = "https://start.spring.io/metadata/client";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

const USER_AGENT: &str = concat!("anvil/", env!("CARGO_PKG_VERSION"));

/// Why a metadata fetch failed.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to parse metadata: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<MetadataError> for ApplicationError {
    fn from(e: MetadataError) -> Self {
        ApplicationError::MetadataFetch {
            reason: e.to_string(),
        }
    }
}

/// Single-attempt HTTP GET of the metadata document.
#[derive(Debug, Clone)]
pub struct HttpMetadataSource {
    url: String,
    client: Client,
}

impl HttpMetadataSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, MetadataError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(MetadataError::Client)?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// Client for the public start.spring.io endpoint.
    pub fn with_defaults() -> Result<Self, MetadataError> {
        Self::new(DEFAULT_METADATA_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn fetch_document(&self) -> Result<InitializrMetadata, MetadataError> {
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|source| MetadataError::Request {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| MetadataError::Request {
            url: self.url.clone(),
            source,
        })?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl MetadataSource for HttpMetadataSource {
    #[instrument(skip(self), fields(url = %self.url))]
    fn fetch(&self) -> AnvilResult<InitializrMetadata> {
        let metadata = self.fetch_document().map_err(ApplicationError::from)?;
        debug!(
            boot_versions = metadata.boot_version.values.len(),
            java_versions = metadata.java_version.values.len(),
            "Fetched version metadata"
        );
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anvil_core::domain::VersionKind;
    use anvil_core::error::AnvilError;

    const BODY: &str = r#"{
        "bootVersion": {
            "default": "3.3.2.RELEASE",
            "values": [{"id": "3.3.2.RELEASE"}, {"id": "3.2.8.RELEASE"}]
        },
        "javaVersion": {
            "default": "17",
            "values": [{"id": "22"}, {"id": "21"}, {"id": "17"}]
        }
    }"#;

    fn source(server: &mockito::Server) -> HttpMetadataSource {
        HttpMetadataSource::new(
            format!("{}/metadata/client", server.url()),
            Duration::from_secs(1),
        )
        .unwrap()
    }

    #[test]
    fn fetches_and_decodes_metadata() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/metadata/client")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(BODY)
            .expect(1)
            .create();

        let metadata = source(&server).fetch().unwrap();
        mock.assert();
        let boot = metadata.catalog(VersionKind::SpringBoot).unwrap();
        assert_eq!(boot.candidates(), ["3.3.2", "3.2.8"]);
        assert_eq!(boot.default_version(), "3.3.2");
    }

    #[test]
    fn server_error_maps_to_metadata_fetch() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/metadata/client")
            .with_status(503)
            .create();

        let err = source(&server).fetch().unwrap_err();
        assert!(matches!(
            err,
            AnvilError::Application(ApplicationError::MetadataFetch { .. })
        ));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/metadata/client")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create();

        let err = source(&server).fetch().unwrap_err();
        assert!(err.to_string().contains("failed to parse metadata"));
    }

    #[test]
    fn unreachable_host_is_a_request_error() {
        let source =
            HttpMetadataSource::new("http://127.0.0.1:9/metadata/client", Duration::from_millis(200))
                .unwrap();
        let err = source.fetch().unwrap_err();
        assert!(err.to_string().contains("request to http://127.0.0.1:9"));
    }
}
