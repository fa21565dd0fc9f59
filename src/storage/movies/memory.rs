//! In-process movie store for tests and database-less local runs.

use crate::domain::movie::MAX_TEXT_LEN;
use crate::domain::{Movie, MovieError, MovieResult};
use crate::storage::movies::MovieStore;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Constraint violations the in-process store enforces in place of the table definition.
#[derive(Debug, Error)]
pub enum ConstraintViolation {
    #[error("duplicate key value violates primary key: id={0}")]
    DuplicateKey(Uuid),

    #[error("value too long for type character varying({max}) in column {column}")]
    ValueTooLong { column: &'static str, max: usize },
}

#[derive(Default)]
pub struct InMemoryMovieStore {
    rows: RwLock<HashMap<Uuid, Movie>>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Mirrors the `VARCHAR(100)` column bound so both stores reject the same writes.
fn check_column_lengths(
    operation: &'static str,
    id: Uuid,
    title: &str,
    genre: &str,
) -> MovieResult<()> {
    for (column, value) in [("title", title), ("genre", genre)] {
        if value.chars().count() > MAX_TEXT_LEN {
            return Err(MovieError::persistence(
                operation,
                Some(id.to_string()),
                ConstraintViolation::ValueTooLong {
                    column,
                    max: MAX_TEXT_LEN,
                },
            ));
        }
    }
    Ok(())
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn ensure_schema(&self) -> MovieResult<()> {
        Ok(())
    }

    async fn insert(&self, movie: &Movie) -> MovieResult<Movie> {
        check_column_lengths("insert", movie.id, &movie.title, &movie.genre)?;
        let mut rows = self.rows.write().await;
        if rows.contains_key(&movie.id) {
            return Err(MovieError::persistence(
                "insert",
                Some(movie.id.to_string()),
                ConstraintViolation::DuplicateKey(movie.id),
            ));
        }
        let now = Utc::now();
        let stored = Movie {
            created_at: now,
            updated_at: now,
            ..movie.clone()
        };
        rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> MovieResult<Movie> {
        self.rows
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| MovieError::not_found(id))
    }

    async fn find_all(&self) -> MovieResult<Vec<Movie>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn update(&self, id: Uuid, title: &str, genre: &str) -> MovieResult<Movie> {
        check_column_lengths("update", id, title, genre)?;
        let mut rows = self.rows.write().await;
        let row = rows.get_mut(&id).ok_or_else(|| MovieError::not_found(id))?;
        row.title = title.to_string();
        row.genre = genre.to_string();
        // Strictly advances at timestamptz resolution, even if the wall clock does not.
        row.updated_at = Utc::now().max(row.updated_at + Duration::microseconds(1));
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> MovieResult<()> {
        match self.rows.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(MovieError::not_found(id)),
        }
    }

    async fn ping(&self) -> MovieResult<()> {
        Ok(())
    }
}
