pub mod bootstrap;
pub mod config;

pub use bootstrap::{init_tracing, open_store, StartupError};
pub use config::{Config, ConfigError, StorageBackend};
