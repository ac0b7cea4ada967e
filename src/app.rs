pub use configuration::*;
pub use cors::OriginPolicy;
pub use startup::RegistrationApp;
pub use telemetry::setup_tracing;

mod configuration;
mod cors;
mod startup;
mod telemetry;
