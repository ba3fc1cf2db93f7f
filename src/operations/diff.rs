// Diff Engine
// Computes differences between the local KV export and the Consul KV store

use serde::Serialize;
use std::collections::HashMap;

/// Flat mapping of KV key to its (still encoded) value
pub type KeyValueMap = HashMap<String, String>;

/// A key present on both sides with differing values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModifiedEntry {
    /// KV key
    pub key: String,
    /// Value in the local export
    #[serde(rename = "local")]
    pub local_value: String,
    /// Value currently stored in Consul
    #[serde(rename = "consul")]
    pub remote_value: String,
}

/// Outcome of comparing a local map against a remote one
///
/// Both sequences are sorted by key on construction, so rendering and
/// equality checks never depend on hash map iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    modified: Vec<ModifiedEntry>,
    #[serde(rename = "only_in_consul")]
    remote_only: Vec<String>,
}

impl DiffResult {
    /// Build a result from its parts
    pub fn new(mut modified: Vec<ModifiedEntry>, mut remote_only: Vec<String>) -> Self {
        modified.sort_by(|a, b| a.key.cmp(&b.key));
        remote_only.sort();

        Self {
            modified,
            remote_only,
        }
    }

    /// Keys whose local and remote values differ
    pub fn modified(&self) -> &[ModifiedEntry] {
        &self.modified
    }

    /// Keys that exist in Consul but not in the local export
    pub fn remote_only(&self) -> &[String] {
        &self.remote_only
    }

    /// Whether any difference was found
    pub fn has_differences(&self) -> bool {
        !self.modified.is_empty() || !self.remote_only.is_empty()
    }
}

/// Compare a local map against a remote map
///
/// Values are compared by exact string equality. Keys that exist only in
/// `local` are not reported.
pub fn compare(local: &KeyValueMap, remote: &KeyValueMap) -> DiffResult {
    let modified = local
        .iter()
        .filter_map(|(key, local_value)| {
            remote
                .get(key)
                .filter(|remote_value| *remote_value != local_value)
                .map(|remote_value| ModifiedEntry {
                    key: key.clone(),
                    local_value: local_value.clone(),
                    remote_value: remote_value.clone(),
                })
        })
        .collect();

    let remote_only = remote
        .keys()
        .filter(|key| !local.contains_key(*key))
        .cloned()
        .collect();

    DiffResult::new(modified, remote_only)
}
