use crate::app::MovieService;
use crate::domain::MovieError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub movie_service: Arc<MovieService>,
}

/// Status codes a failed call carries, named after their gRPC counterparts.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RpcCode {
    NotFound,
    InvalidArgument,
    Internal,
}

impl RpcCode {
    pub fn http_status(self) -> StatusCode {
        match self {
            RpcCode::NotFound => StatusCode::NOT_FOUND,
            RpcCode::InvalidArgument => StatusCode::UNPROCESSABLE_ENTITY,
            RpcCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<RpcCode>,
}

impl ApiResponse {
    pub fn failure(code: RpcCode, message: impl Into<String>) -> (StatusCode, Json<ApiResponse>) {
        (
            code.http_status(),
            Json(ApiResponse {
                success: false,
                data: None,
                error: Some(message.into()),
                code: Some(code),
            }),
        )
    }
}

/// Maps a service error onto the failed-call envelope. `NotFound` keeps its own code so
/// callers can tell it apart from backend failures.
pub fn movie_error_response(err: &MovieError) -> (StatusCode, Json<ApiResponse>) {
    let code = match err {
        MovieError::NotFound { .. } => RpcCode::NotFound,
        MovieError::Persistence { .. } => RpcCode::Internal,
    };
    ApiResponse::failure(code, err.to_string())
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    ApiResponse::failure(
        RpcCode::InvalidArgument,
        format!("Invalid JSON body: {} (expected: {})", err, expected),
    )
}
