use std::convert::TryFrom;

use crate::domain::MalformedInput;

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn trimmed_non_empty(
    value: &str,
    field: &'static str,
) -> Result<String, MalformedInput> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(MalformedInput::MissingField { field })
    } else {
        Ok(trimmed.to_string())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StudentName(String);

impl TryFrom<String> for StudentName {
    type Error = MalformedInput;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        trimmed_non_empty(&name, "student_name").map(Self)
    }
}

impl AsRef<str> for StudentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorkshopName(String);

impl TryFrom<String> for WorkshopName {
    type Error = MalformedInput;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        trimmed_non_empty(&name, "workshop_name").map(Self)
    }
}

impl AsRef<str> for WorkshopName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
