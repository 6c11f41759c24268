use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match err {
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::PoolTimedOut | SqlxError::PoolClosed => {
                RepositoryError::Unavailable(err.to_string())
            }
            SqlxError::Io(_) | SqlxError::Tls(_) => RepositoryError::Unavailable(err.to_string()),
            SqlxError::Database(ref db_err) if db_err.is_unique_violation() => {
                RepositoryError::Conflict(
                    db_err
                        .constraint()
                        .map(|c| format!("unique constraint {c} violated"))
                        .unwrap_or_else(|| db_err.message().to_string()),
                )
            }
            other => RepositoryError::Sqlx(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = RepositoryError::from(SqlxError::RowNotFound);
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[test]
    fn pool_timeout_is_unavailable() {
        let err = RepositoryError::from(SqlxError::PoolTimedOut);
        assert!(matches!(err, RepositoryError::Unavailable(_)));
    }
}
