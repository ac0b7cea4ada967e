use std::convert::TryFrom;
use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

use crate::domain::MalformedInput;

/// How the student attends the workshop.
///
/// Parsing is case sensitive: `online` and `hybrid` are both rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkshopMode {
    Online,
    Offline,
}

impl WorkshopMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkshopMode::Online => "Online",
            WorkshopMode::Offline => "Offline",
        }
    }
}

impl TryFrom<String> for WorkshopMode {
    type Error = MalformedInput;

    fn try_from(mode: String) -> Result<Self, Self::Error> {
        match mode.trim() {
            "Online" => Ok(WorkshopMode::Online),
            "Offline" => Ok(WorkshopMode::Offline),
            _ => Err(MalformedInput::InvalidMode { mode }),
        }
    }
}

impl fmt::Display for WorkshopMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
