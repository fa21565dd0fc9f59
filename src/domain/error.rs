//! Error kinds surfaced by the storage gateway and the movie service.

use thiserror::Error;

/// Underlying cause of a [`MovieError::Persistence`]: a driver error from PostgreSQL or a
/// constraint violation raised by the in-process store.
pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

/// Failure of a single movie operation.
#[derive(Debug, Error)]
pub enum MovieError {
    /// No movie is stored under the requested id.
    #[error("movie not found: {id}")]
    NotFound { id: String },

    /// The backend rejected the statement or could not be reached.
    #[error("database error in {operation}{id_suffix}: {source}", id_suffix = fmt_id(.id))]
    Persistence {
        operation: &'static str,
        id: Option<String>,
        #[source]
        source: BackendError,
    },
}

fn fmt_id(id: &Option<String>) -> String {
    match id {
        Some(id) => format!(" (id={})", id),
        None => String::new(),
    }
}

impl MovieError {
    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    /// Wraps a backend error with the operation name and, when known, the record id.
    pub fn persistence(
        operation: &'static str,
        id: Option<String>,
        source: impl Into<BackendError>,
    ) -> Self {
        Self::Persistence {
            operation,
            id,
            source: source.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type MovieResult<T> = Result<T, MovieError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn not_found_message_names_the_id() {
        let err = MovieError::not_found("abc");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "movie not found: abc");
    }

    #[test]
    fn persistence_error_carries_operation_and_source() {
        let err = MovieError::persistence("insert", Some("abc".into()), sqlx::Error::PoolTimedOut);
        assert!(!err.is_not_found());

        let msg = err.to_string();
        assert!(msg.contains("insert"));
        assert!(msg.contains("id=abc"));
        assert!(err.source().is_some());
    }

    #[test]
    fn persistence_error_without_id() {
        let err = MovieError::persistence("find_all", None, sqlx::Error::PoolClosed);
        assert!(!err.to_string().contains("id="));
    }

    #[test]
    fn persistence_source_keeps_its_concrete_type() {
        let err = MovieError::persistence("ping", None, sqlx::Error::PoolClosed);
        let source = err.source().expect("source");
        assert!(matches!(
            source.downcast_ref::<sqlx::Error>(),
            Some(sqlx::Error::PoolClosed)
        ));
    }
}
