//! PostgreSQL-backed movie store.

use crate::domain::movie::{CREATE_MOVIES_TABLE_SQL, MOVIE_COLUMNS};
use crate::domain::{Movie, MovieError, MovieResult};
use crate::storage::movies::MovieStore;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::time::Duration;
use uuid::Uuid;

/// A movie store that uses a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PostgresMovieStore {
    pool: PgPool,
}

impl PostgresMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool with the given connect options. The first connection is established here,
    /// so an unreachable backend fails startup instead of the first request.
    pub async fn connect(
        options: PgConnectOptions,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    /// Number of stored rows.
    pub async fn count(&self) -> MovieResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| MovieError::persistence("count", None, e))
    }
}

#[async_trait]
impl MovieStore for PostgresMovieStore {
    async fn ensure_schema(&self) -> MovieResult<()> {
        sqlx::query(CREATE_MOVIES_TABLE_SQL)
            .execute(&self.pool)
            .await
            .map_err(|e| MovieError::persistence("ensure_schema", None, e))?;
        tracing::debug!("movies table ensured");
        Ok(())
    }

    async fn insert(&self, movie: &Movie) -> MovieResult<Movie> {
        let sql = format!(
            "INSERT INTO movies (id, title, genre) VALUES ($1, $2, $3) RETURNING {}",
            MOVIE_COLUMNS
        );
        sqlx::query_as::<_, Movie>(&sql)
            .bind(movie.id)
            .bind(&movie.title)
            .bind(&movie.genre)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| MovieError::persistence("insert", Some(movie.id.to_string()), e))
    }

    async fn find_by_id(&self, id: Uuid) -> MovieResult<Movie> {
        let sql = format!("SELECT {} FROM movies WHERE id = $1", MOVIE_COLUMNS);
        sqlx::query_as::<_, Movie>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| MovieError::persistence("find_by_id", Some(id.to_string()), e))?
            .ok_or_else(|| MovieError::not_found(id))
    }

    async fn find_all(&self) -> MovieResult<Vec<Movie>> {
        let sql = format!("SELECT {} FROM movies", MOVIE_COLUMNS);
        sqlx::query_as::<_, Movie>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| MovieError::persistence("find_all", None, e))
    }

    async fn update(&self, id: Uuid, title: &str, genre: &str) -> MovieResult<Movie> {
        let sql = format!(
            "UPDATE movies
             SET title = $2, genre = $3,
                 updated_at = GREATEST(now(), updated_at + interval '1 microsecond')
             WHERE id = $1 RETURNING {}",
            MOVIE_COLUMNS
        );
        sqlx::query_as::<_, Movie>(&sql)
            .bind(id)
            .bind(title)
            .bind(genre)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| MovieError::persistence("update", Some(id.to_string()), e))?
            .ok_or_else(|| MovieError::not_found(id))
    }

    async fn delete(&self, id: Uuid) -> MovieResult<()> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| MovieError::persistence("delete", Some(id.to_string()), e))?;
        if result.rows_affected() == 0 {
            return Err(MovieError::not_found(id));
        }
        Ok(())
    }

    async fn ping(&self) -> MovieResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| MovieError::persistence("ping", None, e))?;
        Ok(())
    }
}
