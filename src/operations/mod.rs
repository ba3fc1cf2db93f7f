// Operations module
// Business logic: loading both KV maps and computing the diff

pub mod consul;
pub mod diff;
pub mod local;

pub use consul::{ConsulClient, ConsulKvPair};
pub use diff::{compare, DiffResult, KeyValueMap, ModifiedEntry};
pub use local::{load_local_kv, parse_local_kv, LocalKvPair};
