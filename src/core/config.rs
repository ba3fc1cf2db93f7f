// Run Configuration
// Resolves compiled defaults, the optional profile, and explicit overrides
// into one validated DiffConfig

use std::path::PathBuf;
use std::time::Duration;

use super::app_config::AppConfig;
use super::error::{KvDiffError, Result};
use super::profile::Profile;
use crate::render::OutputFormat;
use crate::utilities::is_http_address;

/// Settings needed to reach Consul
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsulSettings {
    /// Consul HTTP API address, e.g. `http://127.0.0.1:8500`
    pub address: String,

    /// Datacenter to query
    pub datacenter: String,

    /// Datacenter that is left out of the request
    pub default_datacenter: String,

    /// HTTP request timeout
    pub timeout: Duration,
}

impl Default for ConsulSettings {
    fn default() -> Self {
        let defaults = AppConfig::default().consul;
        Self {
            address: defaults.address,
            datacenter: defaults.datacenter,
            default_datacenter: defaults.default_datacenter,
            timeout: defaults.timeout,
        }
    }
}

/// Values given explicitly on the command line
/// They win over the profile, which wins over compiled defaults
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub consul_addr: Option<String>,
    pub datacenter: Option<String>,
    pub prefix: Option<String>,
    pub timeout_secs: Option<u64>,
    pub format: Option<OutputFormat>,
}

/// Everything one comparison run needs
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Path to the local KV JSON export
    pub local_file: PathBuf,

    /// How to reach Consul
    pub consul: ConsulSettings,

    /// KV prefix to compare; empty compares the whole store
    pub prefix: String,

    /// Report format
    pub format: OutputFormat,
}

impl DiffConfig {
    /// Create a config for `local_file` using compiled defaults
    pub fn new(local_file: impl Into<PathBuf>) -> Self {
        let defaults = AppConfig::default();
        Self {
            local_file: local_file.into(),
            consul: ConsulSettings::default(),
            prefix: String::new(),
            // build.rs only lets `text` or `json` through
            format: defaults.output_format.parse().unwrap_or_default(),
        }
    }

    /// Layer the profile and overrides over compiled defaults, then validate
    pub fn resolve(
        local_file: impl Into<PathBuf>,
        profile: Option<&Profile>,
        overrides: ConfigOverrides,
    ) -> Result<Self> {
        let mut config = Self::new(local_file);

        if let Some(profile) = profile {
            config.apply_profile(profile);
        }
        config.apply_overrides(overrides);

        config.validate()?;
        Ok(config)
    }

    fn apply_profile(&mut self, profile: &Profile) {
        if let Some(addr) = &profile.consul_addr {
            self.consul.address = addr.clone();
        }
        if let Some(dc) = &profile.datacenter {
            self.consul.datacenter = dc.clone();
        }
        if let Some(prefix) = &profile.prefix {
            self.prefix = prefix.clone();
        }
        if let Some(secs) = profile.timeout_secs {
            self.consul.timeout = Duration::from_secs(secs);
        }
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(addr) = overrides.consul_addr {
            self.consul.address = addr;
        }
        if let Some(dc) = overrides.datacenter {
            self.consul.datacenter = dc;
        }
        if let Some(prefix) = overrides.prefix {
            self.prefix = prefix;
        }
        if let Some(secs) = overrides.timeout_secs {
            self.consul.timeout = Duration::from_secs(secs);
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
    }

    /// Check the config is usable before any I/O happens
    pub fn validate(&self) -> Result<()> {
        if self.local_file.as_os_str().is_empty() {
            return Err(KvDiffError::Config("local file path is required".to_string()));
        }

        if !is_http_address(&self.consul.address) {
            return Err(KvDiffError::Config(format!(
                "consul address must start with http:// or https://, got '{}'",
                self.consul.address
            )));
        }

        if self.consul.timeout.is_zero() {
            return Err(KvDiffError::Config("timeout must be greater than zero".to_string()));
        }

        Ok(())
    }
}
