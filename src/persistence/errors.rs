use thiserror::Error;

/// Failure while talking to the registrations store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("timeout")]
    Timeout,
    #[error("database connection lost: {0}")]
    ConnectionLost(#[source] sqlx::Error),
    #[error("database query failed: {0}")]
    Query(#[source] sqlx::Error),
    #[error("registration {id} has an unknown workshop mode: {mode}")]
    CorruptRow { id: i64, mode: String },
}

impl From<sqlx::Error> for PersistenceError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut => PersistenceError::Timeout,
            e @ (sqlx::Error::Io(_) | sqlx::Error::PoolClosed | sqlx::Error::WorkerCrashed) => {
                tracing::error!(error = ?e, "database connection lost");
                PersistenceError::ConnectionLost(e)
            }
            e => PersistenceError::Query(e),
        }
    }
}
