use crate::proto::{
    CreateMovieRequest, CreateMovieResponse, DeleteMovieRequest, DeleteMovieResponse, Movie,
    ReadMovieRequest, ReadMovieResponse, ReadMoviesRequest, ReadMoviesResponse,
    UpdateMovieRequest, UpdateMovieResponse,
};
use crate::transport::rpc::handlers::{health, movies};
use crate::transport::rpc::types::{ApiResponse, AppState, RpcCode};
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Fully qualified service name; every method is served under `/<SERVICE_NAME>/<Method>`.
pub const SERVICE_NAME: &str = "movie.MovieService";

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        movies::create_movie_handler,
        movies::get_movie_handler,
        movies::get_movies_handler,
        movies::update_movie_handler,
        movies::delete_movie_handler
    ),
    components(schemas(
        ApiResponse,
        RpcCode,
        Movie,
        CreateMovieRequest,
        CreateMovieResponse,
        ReadMovieRequest,
        ReadMovieResponse,
        ReadMoviesRequest,
        ReadMoviesResponse,
        UpdateMovieRequest,
        UpdateMovieResponse,
        DeleteMovieRequest,
        DeleteMovieResponse
    ))
)]
pub struct ApiDoc;

fn method_path(method: &str) -> String {
    format!("/{}/{}", SERVICE_NAME, method)
}

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(&method_path("CreateMovie"), post(movies::create_movie_handler))
        .route(&method_path("GetMovie"), post(movies::get_movie_handler))
        .route(&method_path("GetMovies"), post(movies::get_movies_handler))
        .route(&method_path("UpdateMovie"), post(movies::update_movie_handler))
        .route(&method_path("DeleteMovie"), post(movies::delete_movie_handler))
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_documents_every_method() {
        let doc = ApiDoc::openapi();
        for method in ["CreateMovie", "GetMovie", "GetMovies", "UpdateMovie", "DeleteMovie"] {
            assert!(
                doc.paths.paths.contains_key(&method_path(method)),
                "missing {}",
                method
            );
        }
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
