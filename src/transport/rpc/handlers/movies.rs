use crate::domain::MovieResult;
use crate::proto::{
    CreateMovieRequest, DeleteMovieRequest, ReadMovieRequest, ReadMoviesRequest,
    UpdateMovieRequest,
};
use crate::transport::rpc::types::{
    json_422, movie_error_response, ApiResponse, AppState, RpcCode,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Wraps a service result in the response envelope.
fn respond<T: Serialize>(method: &'static str, result: MovieResult<T>) -> Response {
    match result {
        Ok(message) => match serde_json::to_value(message) {
            Ok(data) => (
                StatusCode::OK,
                Json(ApiResponse {
                    success: true,
                    data: Some(data),
                    error: None,
                    code: None,
                }),
            )
                .into_response(),
            Err(e) => ApiResponse::failure(
                RpcCode::Internal,
                format!("failed to encode {} response: {}", method, e),
            )
            .into_response(),
        },
        Err(e) => {
            if e.is_not_found() {
                tracing::debug!(method, error = %e, "call failed");
            } else {
                tracing::error!(method, error = %e, "call failed");
            }
            movie_error_response(&e).into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/movie.MovieService/CreateMovie",
    request_body = CreateMovieRequest,
    responses(
        (status = 200, description = "Movie created; `data` is a CreateMovieResponse", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse),
        (status = 500, description = "Persistence failure", body = ApiResponse)
    )
)]
pub async fn create_movie_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateMovieRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(e, r#"{"movie": {"title": "...", "genre": "..."}}"#).into_response()
        }
    };
    respond("CreateMovie", state.movie_service.create_movie(request).await)
}

#[utoipa::path(
    post,
    path = "/movie.MovieService/GetMovie",
    request_body = ReadMovieRequest,
    responses(
        (status = 200, description = "Movie found; `data` is a ReadMovieResponse", body = ApiResponse),
        (status = 404, description = "No movie with this id", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse),
        (status = 500, description = "Persistence failure", body = ApiResponse)
    )
)]
pub async fn get_movie_handler(
    State(state): State<AppState>,
    request: Result<Json<ReadMovieRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, r#"{"id": "..."}"#).into_response(),
    };
    respond("GetMovie", state.movie_service.get_movie(request).await)
}

/// `GetMovies` takes no arguments, so any request body is ignored.
#[utoipa::path(
    post,
    path = "/movie.MovieService/GetMovies",
    responses(
        (status = 200, description = "All movies; `data` is a ReadMoviesResponse", body = ApiResponse),
        (status = 500, description = "Persistence failure", body = ApiResponse)
    )
)]
pub async fn get_movies_handler(State(state): State<AppState>) -> Response {
    respond(
        "GetMovies",
        state
            .movie_service
            .get_movies(ReadMoviesRequest::default())
            .await,
    )
}

#[utoipa::path(
    post,
    path = "/movie.MovieService/UpdateMovie",
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Movie updated; `data` is an UpdateMovieResponse", body = ApiResponse),
        (status = 404, description = "No movie with this id", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse),
        (status = 500, description = "Persistence failure", body = ApiResponse)
    )
)]
pub async fn update_movie_handler(
    State(state): State<AppState>,
    request: Result<Json<UpdateMovieRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(
                e,
                r#"{"movie": {"id": "...", "title": "...", "genre": "..."}}"#,
            )
            .into_response()
        }
    };
    respond("UpdateMovie", state.movie_service.update_movie(request).await)
}

#[utoipa::path(
    post,
    path = "/movie.MovieService/DeleteMovie",
    request_body = DeleteMovieRequest,
    responses(
        (status = 200, description = "Movie deleted; `data` is a DeleteMovieResponse", body = ApiResponse),
        (status = 404, description = "No movie with this id", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse),
        (status = 500, description = "Persistence failure", body = ApiResponse)
    )
)]
pub async fn delete_movie_handler(
    State(state): State<AppState>,
    request: Result<Json<DeleteMovieRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, r#"{"id": "..."}"#).into_response(),
    };
    respond("DeleteMovie", state.movie_service.delete_movie(request).await)
}
