use std::convert::TryFrom;

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::MalformedInput;

lazy_static! {
    static ref EMAIL_SHAPE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile");
}

/// The form every email is stored and looked up in: trimmed and lower-cased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// A `local@domain.tld` shaped address, already normalized.
///
/// Deliverability is not checked: `a@b.co` is accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct StudentEmail(String);

impl AsRef<str> for StudentEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StudentEmail {
    type Error = MalformedInput;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        if EMAIL_SHAPE.is_match(email.trim()) {
            Ok(StudentEmail(normalize_email(&email)))
        } else {
            Err(MalformedInput::InvalidEmail { email })
        }
    }
}
