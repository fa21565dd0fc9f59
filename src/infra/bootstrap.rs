//! Startup wiring shared by the binaries.

use crate::domain::MovieError;
use crate::infra::config::{Config, ConfigError, StorageBackend};
use crate::storage::{InMemoryMovieStore, MovieStore, PostgresMovieStore};
use std::sync::Arc;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Anything that keeps the process from starting to serve.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("error connecting to the database at {target}: {source}")]
    Connect {
        target: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("error creating table: {0}")]
    Schema(#[source] MovieError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// Initializes the global tracing subscriber (`RUST_LOG` overrides the default filter).
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_rpc=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects the configured store and makes sure the `movies` table exists.
pub async fn open_store(config: &Config) -> Result<Arc<dyn MovieStore>, StartupError> {
    let store: Arc<dyn MovieStore> = match config.storage {
        StorageBackend::Postgres => {
            let db = &config.database;
            tracing::info!(db = %db.redacted_target(), "connecting to PostgreSQL");
            let store = PostgresMovieStore::connect(
                db.connect_options()?,
                db.max_connections,
                db.acquire_timeout,
            )
            .await
            .map_err(|source| StartupError::Connect {
                target: db.redacted_target(),
                source,
            })?;
            tracing::info!("database connection successful");
            Arc::new(store)
        }
        StorageBackend::Memory => {
            tracing::warn!("using the in-memory movie store; data is lost on exit");
            Arc::new(InMemoryMovieStore::new())
        }
    };

    store.ensure_schema().await.map_err(StartupError::Schema)?;
    Ok(store)
}
