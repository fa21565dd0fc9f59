pub mod app;
pub mod domain;
pub mod infra;
pub mod proto;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::MovieService;
pub use domain::{Movie, MovieError, MovieResult};
pub use infra::{Config, StartupError};
pub use storage::{InMemoryMovieStore, MovieStore, PostgresMovieStore};
