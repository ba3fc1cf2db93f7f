// Utilities module
// Helper functions and tools

pub mod endpoint;
pub mod patterns;

pub use endpoint::{is_http_address, kv_url};
pub use patterns::{filter_by_prefix, matches_prefix};
