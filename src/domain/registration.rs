use chrono::{
    DateTime,
    Utc,
};
use serde::Serialize;

use crate::domain::WorkshopMode;

/// A persisted registration. Never mutated once written.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Registration {
    pub id: i64,
    pub student_name: String,
    pub student_email: String,
    pub workshop_name: String,
    pub mode: WorkshopMode,
    pub registration_date: DateTime<Utc>,
}
