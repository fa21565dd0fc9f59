pub mod movies;

pub use movies::{InMemoryMovieStore, MovieStore, PostgresMovieStore};
