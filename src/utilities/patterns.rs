// Pattern Matching Utilities
// Key prefix matching for scoping the local KV map

use crate::operations::KeyValueMap;

/// Check if a key falls under a prefix
/// Byte-wise and case-sensitive; an empty prefix matches every key
pub fn matches_prefix(key: &str, prefix: &str) -> bool {
    key.as_bytes().starts_with(prefix.as_bytes())
}

/// Keep only the entries whose key starts with `prefix`
pub fn filter_by_prefix(kv: KeyValueMap, prefix: &str) -> KeyValueMap {
    if prefix.is_empty() {
        return kv;
    }

    kv.into_iter()
        .filter(|(key, _)| matches_prefix(key, prefix))
        .collect()
}
