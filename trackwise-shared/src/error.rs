/// Storage error types
///
/// Every repository operation returns [`StoreResult`]. The variants separate
/// the outcomes a caller must react to (missing row, uniqueness violation)
/// from opaque database failures.

/// Result alias for repository operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by the storage layer
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No row with the given id exists
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// A unique constraint rejected the write
    #[error("{resource} with this {field} already exists")]
    Duplicate {
        resource: &'static str,
        field: &'static str,
    },

    /// Any other database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Maps a write error, turning unique-constraint violations into
    /// [`StoreError::Duplicate`].
    pub fn from_write(err: sqlx::Error, resource: &'static str, field: &'static str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::Duplicate { resource, field }
            }
            _ => StoreError::Database(err),
        }
    }
}
