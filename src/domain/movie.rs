//! The persisted movie record and its table definition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Upper bound on `title` and `genre`, enforced by the column type.
pub const MAX_TEXT_LEN: usize = 100;

/// Idempotent DDL for the `movies` table.
///
/// The `id` default mirrors the record shape only; the service always assigns the id itself
/// before the first write.
pub const CREATE_MOVIES_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS movies (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    title VARCHAR(100) NOT NULL,
    genre VARCHAR(100) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

/// Column list shared by every statement that returns whole rows.
pub const MOVIE_COLUMNS: &str = "id, title, genre, created_at, updated_at";

/// A single movie as stored in `movies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub genre: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    /// Builds a fresh record with a newly generated id.
    ///
    /// Both timestamps start at `now`; the PostgreSQL store replaces them with the
    /// database clock on insert.
    pub fn new(title: impl Into<String>, genre: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            genre: genre.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Parses a wire identifier. Anything that is not a UUID cannot name a stored movie.
pub fn parse_movie_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
