use thiserror::Error;

/// Errors surfaced by the repository layer.
///
/// Driver failures (unreachable server, authentication, timeouts, malformed
/// filters) pass through unmodified in [`RepositoryError::Database`].
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Invalid user ID format: {0}")]
    InvalidId(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_id_display() {
        let err = RepositoryError::InvalidId("not-an-id".to_string());
        assert_eq!(err.to_string(), "Invalid user ID format: not-an-id");
    }
}
