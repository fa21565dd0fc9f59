//! Wire messages of the `movie.MovieService` unary RPCs.
//!
//! Fields default when absent so that partially filled requests decode the way
//! protobuf messages do.

use crate::domain::Movie as MovieRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A movie as exchanged with callers. `id` is empty on create requests.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(default)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub genre: String,
}

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        Self {
            id: record.id.hyphenated().to_string(),
            title: record.title,
            genre: record.genre,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Default, ToSchema)]
#[serde(default)]
pub struct CreateMovieRequest {
    pub movie: Option<Movie>,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct CreateMovieResponse {
    pub movie: Movie,
}

#[derive(Deserialize, Serialize, Debug, Default, ToSchema)]
#[serde(default)]
pub struct ReadMovieRequest {
    pub id: String,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct ReadMovieResponse {
    pub movie: Movie,
}

#[derive(Deserialize, Serialize, Debug, Default, ToSchema)]
pub struct ReadMoviesRequest {}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct ReadMoviesResponse {
    pub movies: Vec<Movie>,
}

#[derive(Deserialize, Serialize, Debug, Default, ToSchema)]
#[serde(default)]
pub struct UpdateMovieRequest {
    pub movie: Option<Movie>,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct UpdateMovieResponse {
    pub movie: Movie,
}

#[derive(Deserialize, Serialize, Debug, Default, ToSchema)]
#[serde(default)]
pub struct DeleteMovieRequest {
    pub id: String,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct DeleteMovieResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn record_maps_to_wire_movie() {
        let record = MovieRecord::new("Inception", "Sci-Fi", Utc::now());
        let id = record.id.to_string();

        let wire = Movie::from(record);
        assert_eq!(wire.id, id);
        assert_eq!(wire.title, "Inception");
        assert_eq!(wire.genre, "Sci-Fi");
    }

    #[test]
    fn missing_fields_decode_as_defaults() {
        let req: CreateMovieRequest =
            serde_json::from_str(r#"{"movie":{"title":"Up"}}"#).unwrap();
        let movie = req.movie.unwrap();
        assert_eq!(movie.title, "Up");
        assert_eq!(movie.genre, "");
        assert_eq!(movie.id, "");

        let req: UpdateMovieRequest = serde_json::from_str("{}").unwrap();
        assert!(req.movie.is_none());

        let req: DeleteMovieRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.id, "");
    }
}
