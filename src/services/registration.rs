use std::convert::TryFrom;
use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::{
    NewRegistration,
    Registration,
    RegistrationForm,
};
use crate::notifier::Notifier;
use crate::persistence::insert_registration;
use crate::services::ServiceError;

/// Validate, store and confirm one registration.
///
/// The confirmation email is sent on a detached task once the row is
/// written: the caller gets the stored record back without waiting for it,
/// and a delivery failure never turns into an error here. Nothing is sent
/// when validation or the insert fails.
#[tracing::instrument(
    name = "registering student for workshop",
    skip(pool, notifier, form),
    fields(
        student_email = ?form.student_email,
        workshop_name = ?form.workshop_name,
    )
)]
pub async fn submit(
    pool: &PgPool,
    notifier: Arc<Notifier>,
    form: RegistrationForm,
) -> Result<Registration, ServiceError> {
    let new_registration = NewRegistration::try_from(form).map_err(|e| {
        tracing::warn!("rejected registration: {}", e);
        e
    })?;

    let registration = insert_registration(pool, &new_registration).await?;
    tracing::info!(registration_id = registration.id, "registration stored");

    notifier.dispatch(registration.clone());

    Ok(registration)
}
