pub use errors::{
    json_error_handler,
    RouteError,
};
pub use health_check::health_check;
pub use registrations::{
    list_registrations,
    missing_email_parameter,
    register,
    registration_by_email,
};

mod errors;
mod health_check;
mod registrations;
