use std::convert::TryFrom;

use chrono::{
    DateTime,
    Utc,
};
use sqlx::PgPool;

use crate::domain::{
    NewRegistration,
    Registration,
    WorkshopMode,
};
use crate::persistence::PersistenceError;

#[derive(sqlx::FromRow)]
struct RegistrationRow {
    id: i64,
    student_name: String,
    student_email: String,
    workshop_name: String,
    mode: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<RegistrationRow> for Registration {
    type Error = PersistenceError;

    fn try_from(row: RegistrationRow) -> Result<Self, Self::Error> {
        let mode = WorkshopMode::try_from(row.mode.clone()).map_err(|_| {
            PersistenceError::CorruptRow {
                id: row.id,
                mode: row.mode.clone(),
            }
        })?;
        Ok(Registration {
            id: row.id,
            student_name: row.student_name,
            student_email: row.student_email,
            workshop_name: row.workshop_name,
            mode,
            registration_date: row.created_at,
        })
    }
}

#[tracing::instrument(
    name = "inserting new registration in the database",
    skip(pool, new_registration)
)]
pub async fn insert_registration(
    pool: &PgPool,
    new_registration: &NewRegistration,
) -> Result<Registration, PersistenceError> {
    let (id, created_at): (i64, DateTime<Utc>) = sqlx::query_as(
        r#"
        INSERT INTO workshop_registrations ("studentName", "emailId", "workshopName", "workshopMode", created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, created_at
        "#,
    )
    .bind(new_registration.student_name.as_ref())
    .bind(new_registration.student_email.as_ref())
    .bind(new_registration.workshop_name.as_ref())
    .bind(new_registration.mode.as_str())
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        e
    })?;

    Ok(Registration {
        id,
        student_name: new_registration.student_name.as_ref().to_string(),
        student_email: new_registration.student_email.as_ref().to_string(),
        workshop_name: new_registration.workshop_name.as_ref().to_string(),
        mode: new_registration.mode,
        registration_date: created_at,
    })
}

/// Every registration, most recent first.
#[tracing::instrument(name = "listing registrations", skip(pool))]
pub async fn list_registrations(pool: &PgPool) -> Result<Vec<Registration>, PersistenceError> {
    let rows: Vec<RegistrationRow> = sqlx::query_as(
        r#"
        SELECT id,
               "studentName" AS student_name,
               "emailId" AS student_email,
               "workshopName" AS workshop_name,
               "workshopMode" AS mode,
               created_at
        FROM workshop_registrations
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        e
    })?;

    rows.into_iter().map(Registration::try_from).collect()
}

/// Earliest registration stored under `email`, which must already be
/// normalized.
#[tracing::instrument(name = "looking up registration by email", skip(pool))]
pub async fn find_registration_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<Registration>, PersistenceError> {
    let row: Option<RegistrationRow> = sqlx::query_as(
        r#"
        SELECT id,
               "studentName" AS student_name,
               "emailId" AS student_email,
               "workshopName" AS workshop_name,
               "workshopMode" AS mode,
               created_at
        FROM workshop_registrations
        WHERE "emailId" = $1
        ORDER BY id
        LIMIT 1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        e
    })?;

    row.map(Registration::try_from).transpose()
}
