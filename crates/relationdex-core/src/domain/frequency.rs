use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Desired number of days between two interactions of one kind.
///
/// Zero is allowed and reads as "as often as possible".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyDays(u32);

impl FrequencyDays {
    pub const fn new(days: u32) -> Self {
        Self(days)
    }

    pub const fn days(self) -> u32 {
        self.0
    }
}

impl From<u32> for FrequencyDays {
    fn from(days: u32) -> Self {
        Self(days)
    }
}

impl fmt::Display for FrequencyDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.0)
    }
}

impl FromStr for FrequencyDays {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_suffix('d')
            .or_else(|| trimmed.strip_suffix('D'))
            .unwrap_or(trimmed);
        digits
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidFrequency(raw.to_string()))
    }
}
