// Consul KV Client
// Retrieves KV pairs from the Consul HTTP API

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use super::diff::KeyValueMap;
use crate::core::config::ConsulSettings;
use crate::core::error::{KvDiffError, KvInput, Result};
use crate::utilities::kv_url;

/// One entry of a `GET /v1/kv/<prefix>?recurse` response
///
/// Consul sends `"Value": null` for folders and empty values.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsulKvPair {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value", default)]
    pub value: Option<String>,
}

/// Read-only client for the Consul KV store
#[derive(Debug, Clone)]
pub struct ConsulClient {
    settings: ConsulSettings,
    http_client: Client,
}

impl ConsulClient {
    /// Create a client with the configured timeout
    pub fn new(settings: ConsulSettings) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("consul-kv-diff/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_http_client(settings, http_client))
    }

    /// Create a client with a pre-built `reqwest::Client`
    pub fn with_http_client(settings: ConsulSettings, http_client: Client) -> Self {
        Self {
            settings,
            http_client,
        }
    }

    pub fn settings(&self) -> &ConsulSettings {
        &self.settings
    }

    /// Fetch every key under `prefix`
    ///
    /// A 404 means nothing is stored under the prefix and yields an empty map.
    pub async fn fetch(&self, prefix: &str) -> Result<KeyValueMap> {
        let url = kv_url(
            &self.settings.address,
            prefix,
            &self.settings.datacenter,
            &self.settings.default_datacenter,
        );
        debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!("No keys under prefix '{}'", prefix);
            return Ok(KeyValueMap::new());
        }

        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            warn!("Consul returned {} for {}", status, url);
            return Err(KvDiffError::RemoteStatus {
                status: status.as_u16(),
                body: body.trim_end().to_string(),
            });
        }

        let body = response.bytes().await?;
        let map = parse_consul_kv(&body)?;
        debug!("Fetched {} keys from Consul", map.len());
        Ok(map)
    }
}

/// Decode a Consul KV listing
/// Later records win over earlier ones with the same key
pub fn parse_consul_kv(body: &[u8]) -> Result<KeyValueMap> {
    let pairs: Vec<ConsulKvPair> =
        serde_json::from_slice(body).map_err(|source| KvDiffError::Decode {
            input: KvInput::ConsulResponse,
            source,
        })?;

    Ok(pairs
        .into_iter()
        .map(|pair| (pair.key, pair.value.unwrap_or_default()))
        .collect())
}
