//! The movie service.
//!
//! Each operation translates one request message into storage gateway calls and maps the
//! stored rows back into a response message. The service keeps no state between calls;
//! everything lives behind the injected [`MovieStore`].

use crate::domain::movie::parse_movie_id;
use crate::domain::{Movie, MovieError, MovieResult};
use crate::proto::{
    CreateMovieRequest, CreateMovieResponse, DeleteMovieRequest, DeleteMovieResponse,
    ReadMovieRequest, ReadMovieResponse, ReadMoviesRequest, ReadMoviesResponse,
    UpdateMovieRequest, UpdateMovieResponse,
};
use crate::storage::MovieStore;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

pub struct MovieService {
    store: Arc<dyn MovieStore>,
}

impl MovieService {
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn MovieStore> {
        &self.store
    }

    /// Generates the id, builds the full record, then persists it. The returned id is exactly
    /// the one stored.
    #[instrument(skip_all)]
    pub async fn create_movie(
        &self,
        request: CreateMovieRequest,
    ) -> MovieResult<CreateMovieResponse> {
        let input = request.movie.unwrap_or_default();
        let record = Movie::new(input.title, input.genre, Utc::now());

        let stored = self.store.insert(&record).await?;
        info!(id = %stored.id, "movie created");

        Ok(CreateMovieResponse {
            movie: stored.into(),
        })
    }

    #[instrument(skip_all, fields(id = %request.id))]
    pub async fn get_movie(&self, request: ReadMovieRequest) -> MovieResult<ReadMovieResponse> {
        let id = resolve_id(&request.id)?;
        let movie = self.store.find_by_id(id).await?;
        debug!("movie read");

        Ok(ReadMovieResponse {
            movie: movie.into(),
        })
    }

    #[instrument(skip_all)]
    pub async fn get_movies(&self, _request: ReadMoviesRequest) -> MovieResult<ReadMoviesResponse> {
        let movies = self.store.find_all().await?;
        debug!(count = movies.len(), "movies read");

        Ok(ReadMoviesResponse {
            movies: movies.into_iter().map(Into::into).collect(),
        })
    }

    /// Confirms the movie exists, then writes the new title and genre. `updated_at` is
    /// refreshed by the store; `id` and `created_at` never change.
    #[instrument(skip_all, fields(id = tracing::field::Empty))]
    pub async fn update_movie(
        &self,
        request: UpdateMovieRequest,
    ) -> MovieResult<UpdateMovieResponse> {
        let input = request.movie.unwrap_or_default();
        tracing::Span::current().record("id", input.id.as_str());

        let id = resolve_id(&input.id)?;
        self.store.find_by_id(id).await?;

        let updated = self.store.update(id, &input.title, &input.genre).await?;
        info!("movie updated");

        Ok(UpdateMovieResponse {
            movie: updated.into(),
        })
    }

    #[instrument(skip_all, fields(id = %request.id))]
    pub async fn delete_movie(
        &self,
        request: DeleteMovieRequest,
    ) -> MovieResult<DeleteMovieResponse> {
        let id = resolve_id(&request.id)?;
        self.store.find_by_id(id).await?;
        self.store.delete(id).await?;
        info!("movie deleted");

        Ok(DeleteMovieResponse { success: true })
    }
}

/// Ids that are not UUIDs were never issued, so they resolve to `NotFound`.
fn resolve_id(raw: &str) -> MovieResult<Uuid> {
    parse_movie_id(raw).ok_or_else(|| MovieError::not_found(raw))
}
