// consul-kv-diff Library
// Compares a local Consul KV export against the live Consul KV store

// Core infrastructure - configuration, errors, and the run entry point
pub mod core;

// Operations - loaders and the diff itself
pub mod operations;

// Render - report output
pub mod render;

// Utilities - helper functions and tools
pub mod utilities;

// Re-export commonly used items for convenience
pub use self::core::{App, DiffConfig, KvDiffError};
pub use operations::{compare, DiffResult, KeyValueMap, ModifiedEntry};
pub use render::{render_report, OutputFormat};
