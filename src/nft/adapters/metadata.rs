//! HTTP adapter for the metadata fetcher port.

use crate::nft::ports::{MetadataError, MetadataFetcher, MetadataResult};
use async_trait::async_trait;
use serde_json::Value;

const IPFS_SCHEME: &str = "ipfs://";

/// Rewrites an `ipfs://` URI onto `gateway`; other URIs pass through.
#[must_use]
pub fn resolve_gateway_uri(uri: &str, gateway: &str) -> String {
    uri.strip_prefix(IPFS_SCHEME).map_or_else(
        || uri.to_owned(),
        |path| format!("{}/{path}", gateway.trim_end_matches('/')),
    )
}

/// Metadata fetcher issuing plain GET requests.
#[derive(Debug, Clone)]
pub struct HttpMetadataFetcher {
    client: reqwest::Client,
    gateway: String,
}

impl HttpMetadataFetcher {
    /// Creates a fetcher resolving `ipfs://` URIs through `gateway`.
    #[must_use]
    pub fn new(client: reqwest::Client, gateway: impl Into<String>) -> Self {
        Self {
            client,
            gateway: gateway.into(),
        }
    }
}

#[async_trait]
impl MetadataFetcher for HttpMetadataFetcher {
    async fn fetch(&self, uri: &str) -> MetadataResult<Value> {
        let response = self
            .client
            .get(resolve_gateway_uri(uri, &self.gateway))
            .send()
            .await
            .map_err(MetadataError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::UpstreamStatus {
                status: status.as_u16(),
            });
        }
        response.json().await.map_err(MetadataError::transport)
    }
}
