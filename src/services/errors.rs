use thiserror::Error;

use crate::domain::MalformedInput;
use crate::persistence::PersistenceError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] MalformedInput),
    #[error("an email is required for the lookup")]
    MissingEmail,
    #[error("no registration found for {email}")]
    NotFound { email: String },
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
