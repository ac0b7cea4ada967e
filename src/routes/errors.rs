use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{
    HttpRequest,
    HttpResponse,
    ResponseError,
};
use custom_error::custom_error;
use serde::Serialize;

use crate::domain::MalformedInput;
use crate::persistence::PersistenceError;
use crate::services::ServiceError;

custom_error! {
///! Error inside route handler
pub RouteError
    InvalidPayload{message: String} = "Invalid request body: {message}",
    InvalidRegistration{source: MalformedInput} = "Invalid registration: {source}",
    MissingEmailParameter = "Email parameter is required",
    RegistrationNotFound{email: String} = "No registration found for {email}",
    StoreFailure{public_message: &'static str, source: PersistenceError} = "{source}",
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl RouteError {
    /// Wrap a service failure; `failure_message` is what the client sees if
    /// the store is at fault.
    pub fn from_service(error: ServiceError, failure_message: &'static str) -> Self {
        match error {
            ServiceError::Validation(source) => RouteError::InvalidRegistration { source },
            ServiceError::MissingEmail => RouteError::MissingEmailParameter,
            ServiceError::NotFound { email } => RouteError::RegistrationNotFound { email },
            ServiceError::Persistence(source) => {
                tracing::error!(error = ?source, "{}", failure_message);
                RouteError::StoreFailure {
                    public_message: failure_message,
                    source,
                }
            }
        }
    }

    /// The message returned to the client. Store failures never expose their
    /// cause.
    fn public_message(&self) -> String {
        match self {
            RouteError::InvalidPayload { .. } => "Request body must be a JSON object".into(),
            RouteError::InvalidRegistration { source } => match source {
                MalformedInput::MissingField { .. } => "All fields are required".into(),
                MalformedInput::InvalidEmail { .. } => "Invalid email format".into(),
                MalformedInput::InvalidMode { .. } => "Invalid workshop mode".into(),
            },
            RouteError::MissingEmailParameter => "Email parameter is required".into(),
            RouteError::RegistrationNotFound { .. } => {
                "No registration found for this email".into()
            }
            RouteError::StoreFailure { public_message, .. } => public_message.to_string(),
        }
    }
}

impl ResponseError for RouteError {
    fn status_code(&self) -> StatusCode {
        match self {
            RouteError::InvalidPayload { .. }
            | RouteError::InvalidRegistration { .. }
            | RouteError::MissingEmailParameter => StatusCode::BAD_REQUEST,
            RouteError::RegistrationNotFound { .. } => StatusCode::NOT_FOUND,
            RouteError::StoreFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            success: false,
            message: self.public_message(),
        })
    }
}

/// Turns undecodable JSON bodies into the same error shape as every other
/// failure.
pub fn json_error_handler(error: JsonPayloadError, _request: &HttpRequest) -> actix_web::Error {
    tracing::warn!("rejected request body: {}", error);
    RouteError::InvalidPayload {
        message: error.to_string(),
    }
    .into()
}
