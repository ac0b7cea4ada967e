use sqlx::PgPool;

use crate::domain::{
    normalize_email,
    Registration,
};
use crate::persistence::{
    find_registration_by_email,
    list_registrations,
};
use crate::services::ServiceError;

pub async fn list_all(pool: &PgPool) -> Result<Vec<Registration>, ServiceError> {
    Ok(list_registrations(pool).await?)
}

/// Case-insensitive lookup. When the same address registered more than once
/// the earliest registration is returned.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Registration, ServiceError> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err(ServiceError::MissingEmail);
    }
    let registration = find_registration_by_email(pool, &email).await?;
    registration.ok_or(ServiceError::NotFound { email })
}
