// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use std::time::Duration;

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Built-in defaults for consul-kv-diff
/// Values are compiled in from config.yaml at build time
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Consul connection defaults
    pub consul: ConsulDefaults,

    /// Report format used when none is requested: "text" or "json"
    pub output_format: String,
}

#[derive(Debug, Clone)]
pub struct ConsulDefaults {
    /// Consul HTTP API address
    pub address: String,

    /// Datacenter to query
    pub datacenter: String,

    /// Datacenter the agent serves itself; never sent as `dc=`
    pub default_datacenter: String,

    /// HTTP request timeout
    pub timeout: Duration,
}

impl Default for ConsulDefaults {
    fn default() -> Self {
        Self {
            address: compiled::CONSUL_ADDR.to_string(),
            datacenter: compiled::DATACENTER.to_string(),
            default_datacenter: compiled::DEFAULT_DATACENTER.to_string(),
            timeout: Duration::from_secs(compiled::TIMEOUT_SECS),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            consul: ConsulDefaults::default(),
            output_format: compiled::OUTPUT_FORMAT.to_string(),
        }
    }
}
