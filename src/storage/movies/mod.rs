pub mod memory;
pub mod postgres;

pub use memory::InMemoryMovieStore;
pub use postgres::PostgresMovieStore;

use crate::domain::{Movie, MovieResult};
use async_trait::async_trait;
use uuid::Uuid;

/// Record-level operations over the `movies` table.
///
/// Implementations must be safe to call from many request tasks at once; they delegate
/// that safety to the backend client rather than adding locks of their own.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Idempotently creates the backing table.
    async fn ensure_schema(&self) -> MovieResult<()>;

    /// Persists a fully populated record and returns the stored row.
    async fn insert(&self, movie: &Movie) -> MovieResult<Movie>;

    async fn find_by_id(&self, id: Uuid) -> MovieResult<Movie>;

    /// All rows in backend scan order. Empty when the table is empty.
    async fn find_all(&self) -> MovieResult<Vec<Movie>>;

    /// Sets title and genre and refreshes `updated_at`.
    async fn update(&self, id: Uuid, title: &str, genre: &str) -> MovieResult<Movie>;

    async fn delete(&self, id: Uuid) -> MovieResult<()>;

    /// Cheap round trip used by health checks.
    async fn ping(&self) -> MovieResult<()>;
}
