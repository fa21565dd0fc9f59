//! Unary RPC surface of `movie.MovieService`, served as JSON over HTTP.

pub mod router;
pub mod types;
pub mod handlers {
    pub mod health;
    pub mod movies;
}

pub use router::{create_router, ApiDoc, SERVICE_NAME};
pub use types::{ApiResponse, AppState, RpcCode};
