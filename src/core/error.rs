// Error Types
// Failure taxonomy for loading and fetching KV data

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which structured input failed to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KvInput {
    /// The local `consul kv export` file
    LocalExport,
    /// A Consul KV listing
    ConsulResponse,
}

impl fmt::Display for KvInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalExport => f.write_str("local KV JSON"),
            Self::ConsulResponse => f.write_str("Consul response"),
        }
    }
}

/// Errors raised while assembling the two KV maps.
///
/// The comparison itself never fails; every variant here comes from a
/// loader, the Consul client, or configuration.
#[derive(Debug, Error)]
pub enum KvDiffError {
    /// Local source could not be opened or read
    #[error("failed to open {}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Structured input was malformed
    #[error("failed to decode {input}")]
    Decode {
        input: KvInput,
        #[source]
        source: serde_json::Error,
    },

    /// Consul could not be reached, or the request timed out
    #[error("failed to execute request")]
    Network(#[from] reqwest::Error),

    /// Consul answered with a status other than 200 or 404
    #[error("consul returned status {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    /// Run configuration or profile is unusable
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl KvDiffError {
    /// Whether this error came from talking to Consul
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Network(_)
                | Self::RemoteStatus { .. }
                | Self::Decode {
                    input: KvInput::ConsulResponse,
                    ..
                }
        )
    }

    /// Operation that failed, as shown after `Error ` on stderr
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Config(_) => "resolving configuration",
            _ if self.is_remote() => "loading Consul KV",
            _ => "loading local KV",
        }
    }
}

pub type Result<T> = std::result::Result<T, KvDiffError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error(input: KvInput) -> KvDiffError {
        let source = serde_json::from_str::<Vec<String>>("<html>").unwrap_err();
        KvDiffError::Decode { input, source }
    }

    #[test]
    fn test_remote_status_message_includes_body() {
        let err = KvDiffError::RemoteStatus {
            status: 500,
            body: "rpc error".to_string(),
        };
        assert_eq!(err.to_string(), "consul returned status 500: rpc error");
        assert!(err.is_remote());
        assert_eq!(err.operation(), "loading Consul KV");
    }

    #[test]
    fn test_file_access_message_names_path() {
        let err = KvDiffError::FileAccess {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "failed to open missing.json");
        assert!(!err.is_remote());
        assert_eq!(err.operation(), "loading local KV");
    }

    #[test]
    fn test_decode_error_blames_its_input() {
        let remote = decode_error(KvInput::ConsulResponse);
        assert!(remote.is_remote());
        assert_eq!(remote.operation(), "loading Consul KV");
        assert_eq!(remote.to_string(), "failed to decode Consul response");

        let local = decode_error(KvInput::LocalExport);
        assert!(!local.is_remote());
        assert_eq!(local.operation(), "loading local KV");
        assert_eq!(local.to_string(), "failed to decode local KV JSON");
    }

    #[test]
    fn test_config_error_operation() {
        let err = KvDiffError::Config("timeout must be greater than zero".to_string());
        assert!(!err.is_remote());
        assert_eq!(err.operation(), "resolving configuration");
    }
}
