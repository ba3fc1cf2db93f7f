// Profile Configuration
// Optional YAML file holding connection settings for a Consul cluster

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::error::{KvDiffError, Result};

/// Connection settings loaded from a profile file
/// Every field is optional; unset fields fall through to compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Consul HTTP API address
    #[serde(default)]
    pub consul_addr: Option<String>,

    /// Consul datacenter
    #[serde(default)]
    pub datacenter: Option<String>,

    /// KV prefix to compare
    #[serde(default)]
    pub prefix: Option<String>,

    /// HTTP timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Profile {
    /// Load a profile from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            KvDiffError::Config(format!("failed to read profile {}: {}", path.display(), e))
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            KvDiffError::Config(msg) => {
                KvDiffError::Config(format!("{} in {}", msg, path.display()))
            }
            other => other,
        })
    }

    /// Parse a profile from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document is a valid, empty profile
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content)
            .map_err(|e| KvDiffError::Config(format!("failed to parse profile YAML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_profile() {
        let profile = Profile::from_yaml(
            "consul_addr: http://consul:8500\n\
             datacenter: us-east-1\n\
             prefix: app/production\n\
             timeout_secs: 10\n",
        )
        .unwrap();

        assert_eq!(profile.consul_addr.as_deref(), Some("http://consul:8500"));
        assert_eq!(profile.datacenter.as_deref(), Some("us-east-1"));
        assert_eq!(profile.prefix.as_deref(), Some("app/production"));
        assert_eq!(profile.timeout_secs, Some(10));
    }

    #[test]
    fn test_partial_and_empty_profiles() {
        let partial = Profile::from_yaml("datacenter: eu-west-1\n").unwrap();
        assert_eq!(partial.datacenter.as_deref(), Some("eu-west-1"));
        assert_eq!(partial.consul_addr, None);

        assert_eq!(Profile::from_yaml("   \n").unwrap(), Profile::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Profile::from_yaml("consul_address: http://typo:8500\n").unwrap_err();
        assert!(matches!(err, KvDiffError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "prefix: app/").unwrap();

        let profile = Profile::load(file.path()).unwrap();
        assert_eq!(profile.prefix.as_deref(), Some("app/"));

        let err = Profile::load(Path::new("no-such-profile.yaml")).unwrap_err();
        assert!(matches!(err, KvDiffError::Config(_)));
        assert!(err.to_string().contains("no-such-profile.yaml"));
        assert_eq!(err.operation(), "resolving configuration");
    }

    #[test]
    fn test_load_malformed_file_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs: soon").unwrap();

        let err = Profile::load(file.path()).unwrap_err();
        assert!(matches!(err, KvDiffError::Config(_)));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
