//! Domain types for the movie service.

pub mod error;
pub mod movie;

pub use error::{BackendError, MovieError, MovieResult};
pub use movie::Movie;
