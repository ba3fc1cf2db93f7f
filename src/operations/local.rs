// Local KV Loader
// Reads a `consul kv export` JSON file into a KeyValueMap

use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

use super::diff::KeyValueMap;
use crate::core::error::{KvDiffError, KvInput, Result};

/// One record of a `consul kv export` file
#[derive(Debug, Clone, Deserialize)]
pub struct LocalKvPair {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Load KV pairs from a local JSON file
pub fn load_local_kv(path: &Path) -> Result<KeyValueMap> {
    let file = File::open(path).map_err(|source| KvDiffError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let map = parse_local_kv(BufReader::new(file))?;
    debug!("Loaded {} local keys from {}", map.len(), path.display());
    Ok(map)
}

/// Decode a JSON array of `{"key", "value"}` records
/// Later records win over earlier ones with the same key
pub fn parse_local_kv<R: Read>(reader: R) -> Result<KeyValueMap> {
    let pairs: Vec<LocalKvPair> =
        serde_json::from_reader(reader).map_err(|source| KvDiffError::Decode {
            input: KvInput::LocalExport,
            source,
        })?;

    Ok(pairs
        .into_iter()
        .map(|pair| (pair.key, pair.value.unwrap_or_default()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn load_str(content: &str) -> Result<KeyValueMap> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        load_local_kv(file.path())
    }

    #[test]
    fn test_load_valid_json() {
        let map = load_str(
            r#"[
                {"key": "app/host", "value": "bG9jYWxob3N0"},
                {"key": "app/port", "value": "ODA4MA=="}
            ]"#,
        )
        .unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map["app/host"], "bG9jYWxob3N0");
        assert_eq!(map["app/port"], "ODA4MA==");
    }

    #[test]
    fn test_load_empty_array() {
        assert!(load_str("[]").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = load_str(r#"{"invalid": "json""#).unwrap_err();
        assert!(matches!(err, KvDiffError::Decode { .. }));
    }

    #[test]
    fn test_object_instead_of_array_is_decode_error() {
        let err = load_str(r#"{"key": "a", "value": "b"}"#).unwrap_err();
        assert!(matches!(err, KvDiffError::Decode { .. }));
    }

    #[test]
    fn test_missing_file_is_file_access_error() {
        let err = load_local_kv(Path::new("non-existent-file.json")).unwrap_err();
        assert!(matches!(err, KvDiffError::FileAccess { .. }));
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let map = parse_local_kv(
            r#"[{"key": "k", "value": "Zmlyc3Q="}, {"key": "k", "value": "c2Vjb25k"}]"#.as_bytes(),
        )
        .unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map["k"], "c2Vjb25k");
    }

    #[test]
    fn test_null_and_missing_values_become_empty() {
        let map = parse_local_kv(
            r#"[{"key": "folder/", "value": null}, {"key": "bare", "flags": 0}]"#.as_bytes(),
        )
        .unwrap();

        assert_eq!(map["folder/"], "");
        assert_eq!(map["bare"], "");
    }
}
