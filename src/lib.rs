//! Workshop registration backend.
//!
//! Validates registrations submitted over HTTP, stores them in Postgres and
//! sends each student a confirmation email without holding up the response.

pub mod app;
pub mod domain;
pub mod email_client;
pub mod notifier;
pub mod persistence;
pub mod routes;
pub mod services;
