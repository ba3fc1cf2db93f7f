// Endpoint Utilities
// Builds Consul KV API URLs

/// Build the recursive KV read URL for a prefix
///
/// The `dc` query parameter is only added for a datacenter other than the
/// agent's own, mirroring how the Consul CLI omits it.
pub fn kv_url(address: &str, prefix: &str, datacenter: &str, default_datacenter: &str) -> String {
    let address = address.trim_end_matches('/');
    let prefix = prefix.trim_start_matches('/');

    let mut url = format!("{}/v1/kv/{}?recurse", address, prefix);

    if !datacenter.is_empty() && datacenter != default_datacenter {
        url.push_str("&dc=");
        url.push_str(datacenter);
    }

    url
}

/// Check that an address is an absolute http(s) URL
pub fn is_http_address(address: &str) -> bool {
    let rest = address
        .strip_prefix("http://")
        .or_else(|| address.strip_prefix("https://"));

    matches!(rest, Some(host) if !host.is_empty() && !host.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kv_url_without_prefix() {
        assert_eq!(
            kv_url("http://127.0.0.1:8500", "", "dc1", "dc1"),
            "http://127.0.0.1:8500/v1/kv/?recurse"
        );
    }

    #[test]
    fn test_kv_url_with_prefix() {
        assert_eq!(
            kv_url("http://consul:8500/", "app/production", "dc1", "dc1"),
            "http://consul:8500/v1/kv/app/production?recurse"
        );
        assert_eq!(
            kv_url("http://consul:8500", "/app", "", "dc1"),
            "http://consul:8500/v1/kv/app?recurse"
        );
    }

    #[test]
    fn test_kv_url_datacenter() {
        assert_eq!(
            kv_url("http://consul:8500", "app", "us-east-1", "dc1"),
            "http://consul:8500/v1/kv/app?recurse&dc=us-east-1"
        );
        assert_eq!(
            kv_url("http://consul:8500", "app", "dc1", "dc1"),
            "http://consul:8500/v1/kv/app?recurse"
        );
    }

    #[test]
    fn test_is_http_address() {
        assert!(is_http_address("http://127.0.0.1:8500"));
        assert!(is_http_address("https://consul.example.com"));
        assert!(!is_http_address("127.0.0.1:8500"));
        assert!(!is_http_address("http://"));
        assert!(!is_http_address("ftp://consul"));
    }
}
