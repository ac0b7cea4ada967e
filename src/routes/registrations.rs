use actix_web::{
    web,
    HttpResponse,
};
use serde::Serialize;
use sqlx::PgPool;

use crate::domain::{
    Registration,
    RegistrationForm,
};
use crate::notifier::Notifier;
use crate::routes::RouteError;
use crate::services;

const REGISTRATION_FAILED: &str =
    "An unexpected error occurred during registration. Please try again.";
const LIST_FAILED: &str = "Failed to retrieve registrations";
const LOOKUP_FAILED: &str = "Failed to retrieve registration";

#[derive(Serialize)]
struct RegistrationResponse<'a> {
    success: bool,
    message: String,
    data: &'a Registration,
}

#[derive(Serialize)]
struct RegistrationListResponse<'a> {
    success: bool,
    message: &'static str,
    data: &'a [Registration],
    count: usize,
}

#[tracing::instrument(
    name = "handling workshop registration",
    skip(form, postgres_pool, notifier)
)]
pub async fn register(
    form: web::Json<RegistrationForm>,
    postgres_pool: web::Data<PgPool>,
    notifier: web::Data<Notifier>,
) -> Result<HttpResponse, RouteError> {
    let registration = services::submit(
        postgres_pool.get_ref(),
        notifier.into_inner(),
        form.into_inner(),
    )
    .await
    .map_err(|e| RouteError::from_service(e, REGISTRATION_FAILED))?;

    Ok(HttpResponse::Created().json(RegistrationResponse {
        success: true,
        message: format!(
            "Successfully registered for {}! A confirmation email has been sent to {}.",
            registration.workshop_name, registration.student_email
        ),
        data: &registration,
    }))
}

#[tracing::instrument(name = "listing registrations", skip(postgres_pool))]
pub async fn list_registrations(
    postgres_pool: web::Data<PgPool>,
) -> Result<HttpResponse, RouteError> {
    let registrations = services::list_all(postgres_pool.get_ref())
        .await
        .map_err(|e| RouteError::from_service(e, LIST_FAILED))?;

    Ok(HttpResponse::Ok().json(RegistrationListResponse {
        success: true,
        message: "Registrations retrieved successfully",
        count: registrations.len(),
        data: &registrations,
    }))
}

#[tracing::instrument(name = "looking up registration", skip(postgres_pool))]
pub async fn registration_by_email(
    email: web::Path<String>,
    postgres_pool: web::Data<PgPool>,
) -> Result<HttpResponse, RouteError> {
    let registration = services::find_by_email(postgres_pool.get_ref(), &email)
        .await
        .map_err(|e| RouteError::from_service(e, LOOKUP_FAILED))?;

    Ok(HttpResponse::Ok().json(RegistrationResponse {
        success: true,
        message: "Registration found".into(),
        data: &registration,
    }))
}

pub async fn missing_email_parameter() -> Result<HttpResponse, RouteError> {
    Err(RouteError::MissingEmailParameter)
}
