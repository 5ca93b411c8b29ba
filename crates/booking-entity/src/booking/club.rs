//! Club enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two organizing clubs.
///
/// Each club has its own independent seat pool per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "club", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Club {
    /// The Xploit club.
    Xploit,
    /// The E-Cell club.
    Ecell,
}

impl Club {
    /// Return the club as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xploit => "xploit",
            Self::Ecell => "ecell",
        }
    }

    /// Name of the occupancy counter column for this club.
    pub fn counter_column(&self) -> &'static str {
        match self {
            Self::Xploit => "xploit_bookings",
            Self::Ecell => "ecell_bookings",
        }
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Club {
    type Err = booking_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xploit" => Ok(Self::Xploit),
            "ecell" => Ok(Self::Ecell),
            other => Err(booking_core::AppError::validation(format!(
                "Invalid club: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for club in [Club::Xploit, Club::Ecell] {
            assert_eq!(club.as_str().parse::<Club>().unwrap(), club);
        }
    }

    #[test]
    fn test_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Club::Ecell).unwrap(), "\"ecell\"");
        let club: Club = serde_json::from_str("\"xploit\"").unwrap();
        assert_eq!(club, Club::Xploit);
    }

    #[test]
    fn test_rejects_unknown_value() {
        assert!("chess".parse::<Club>().is_err());
        assert!(serde_json::from_str::<Club>("\"chess\"").is_err());
    }
}
