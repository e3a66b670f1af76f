use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const SLOT_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// A slot descriptor exactly as the backend sent it, usually `"HH:MM"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slot(pub String);

impl Slot {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Start time, when the descriptor is `HH:MM` or `HH:MM:SS`.
    pub fn time(&self) -> Option<NaiveTime> {
        SLOT_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(self.0.trim(), format).ok())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Slot {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Slot(s.to_string()))
    }
}

/// Body of a successful `/appointments/available-slots` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableSlots {
    pub available_slots: Vec<Slot>,
}

/// Error payload the appointment backend sends with 4xx answers.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
