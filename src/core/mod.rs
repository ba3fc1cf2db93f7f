// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod app;
pub mod app_config;
pub mod config;
pub mod error;
pub mod profile;

pub use app::App;
pub use app_config::AppConfig;
pub use config::{ConfigOverrides, ConsulSettings, DiffConfig};
pub use error::{KvDiffError, KvInput, Result};
pub use profile::Profile;
