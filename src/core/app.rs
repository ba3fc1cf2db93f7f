// Application Runner
// Loads both KV maps and compares them

use tracing::info;

use super::config::DiffConfig;
use super::error::Result;
use crate::operations::{compare, load_local_kv, ConsulClient, DiffResult};
use crate::utilities::filter_by_prefix;

/// One comparison run
#[derive(Debug)]
pub struct App {
    /// Resolved run configuration
    pub config: DiffConfig,

    /// Client for the Consul KV store
    client: ConsulClient,
}

impl App {
    /// Create a new application instance
    pub fn new(config: DiffConfig) -> Result<Self> {
        let client = ConsulClient::new(config.consul.clone())?;
        Ok(Self::with_client(config, client))
    }

    /// Create an application instance around an existing client
    pub fn with_client(config: DiffConfig, client: ConsulClient) -> Self {
        Self { config, client }
    }

    /// Load the local export, fetch Consul, and diff the two
    pub async fn run(&self) -> Result<DiffResult> {
        let local = load_local_kv(&self.config.local_file)?;
        info!(
            "Loaded {} keys from {}",
            local.len(),
            self.config.local_file.display()
        );

        let remote = self.client.fetch(&self.config.prefix).await?;
        info!(
            "Fetched {} keys from {} (datacenter {})",
            remote.len(),
            self.client.settings().address,
            self.client.settings().datacenter
        );

        // Consul already scoped its answer; scope the local side to match
        let local = if self.config.prefix.is_empty() {
            local
        } else {
            let before = local.len();
            let filtered = filter_by_prefix(local, &self.config.prefix);
            info!(
                "Prefix '{}' kept {} of {} local keys",
                self.config.prefix,
                filtered.len(),
                before
            );
            filtered
        };

        let result = compare(&local, &remote);
        info!(
            "{} modified, {} only in Consul",
            result.modified().len(),
            result.remote_only().len()
        );

        Ok(result)
    }
}
