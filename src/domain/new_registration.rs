use std::convert::{
    TryFrom,
    TryInto,
};

use serde::Deserialize;

use crate::domain::registration_text::trimmed_non_empty;
use crate::domain::{
    MalformedInput,
    StudentEmail,
    StudentName,
    WorkshopMode,
    WorkshopName,
};

/// Registration payload as sent by the client, nothing checked yet.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RegistrationForm {
    pub student_name: Option<String>,
    pub student_email: Option<String>,
    pub workshop_name: Option<String>,
    pub mode: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewRegistration {
    pub student_name: StudentName,
    pub student_email: StudentEmail,
    pub workshop_name: WorkshopName,
    pub mode: WorkshopMode,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, MalformedInput> {
    trimmed_non_empty(value.as_deref().unwrap_or_default(), field)
}

impl TryFrom<RegistrationForm> for NewRegistration {
    type Error = MalformedInput;

    /// Presence of every field is checked before any format check.
    fn try_from(form: RegistrationForm) -> Result<Self, Self::Error> {
        let student_name = required(form.student_name, "student_name")?;
        let student_email = required(form.student_email, "student_email")?;
        let workshop_name = required(form.workshop_name, "workshop_name")?;
        let mode = required(form.mode, "mode")?;

        let student_email: StudentEmail = student_email.try_into()?;
        let mode: WorkshopMode = mode.try_into()?;
        Ok(NewRegistration {
            student_name: student_name.try_into()?,
            student_email,
            workshop_name: workshop_name.try_into()?,
            mode,
        })
    }
}
