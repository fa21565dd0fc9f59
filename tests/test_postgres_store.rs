//! PostgreSQL gateway test. Needs a reachable database:
//!
//!   DATABASE_URL=postgres://... cargo test --features pg-tests --test test_postgres_store
#![cfg(feature = "pg-tests")]

use movie_rpc::{Movie, MovieStore, PostgresMovieStore};
use sqlx::postgres::PgConnectOptions;
use std::collections::HashSet;
use std::time::Duration;

async fn connect() -> Result<PostgresMovieStore, Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL")?;
    let options = database_url.parse::<PgConnectOptions>()?;
    let store = PostgresMovieStore::connect(options, 5, Duration::from_secs(5)).await?;
    store.ensure_schema().await?;
    Ok(store)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_postgres_crud_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let store = connect().await?;

    // Idempotent.
    store.ensure_schema().await?;
    store.ping().await?;

    let record = Movie::new("Inception", "Sci-Fi", chrono::Utc::now());
    let stored = store.insert(&record).await?;
    assert_eq!(stored.id, record.id);
    assert_eq!(stored.title, "Inception");

    let found = store.find_by_id(record.id).await?;
    assert_eq!(found, stored);

    let updated = store.update(record.id, "Inception (Director's Cut)", "Sci-Fi").await?;
    assert_eq!(updated.id, stored.id);
    assert_eq!(updated.created_at, stored.created_at);
    assert!(updated.updated_at > stored.updated_at);

    store.delete(record.id).await?;
    assert!(store.find_by_id(record.id).await.unwrap_err().is_not_found());
    assert!(store.delete(record.id).await.unwrap_err().is_not_found());
    assert!(store
        .update(record.id, "x", "y")
        .await
        .unwrap_err()
        .is_not_found());

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_postgres_find_all_contains_inserted() -> Result<(), Box<dyn std::error::Error>> {
    let store = connect().await?;

    let mut ids = HashSet::new();
    for title in ["A", "B", "C"] {
        let stored = store.insert(&Movie::new(title, "genre", chrono::Utc::now())).await?;
        ids.insert(stored.id);
    }

    // Other tests may share the table, so only require ours to be present.
    let all: HashSet<_> = store.find_all().await?.into_iter().map(|m| m.id).collect();
    assert!(ids.is_subset(&all));

    for id in ids {
        store.delete(id).await?;
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_postgres_duplicate_id_is_persistence_error() -> Result<(), Box<dyn std::error::Error>> {
    let store = connect().await?;
    let record = Movie::new("Heat", "Crime", chrono::Utc::now());
    store.insert(&record).await?;

    let err = store.insert(&record).await.unwrap_err();
    assert!(!err.is_not_found());

    store.delete(record.id).await?;
    Ok(())
}
