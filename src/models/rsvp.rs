//! RSVP model and the closed attendance enumeration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attendance status for an RSVP.
///
/// `maybe` is the canonical third value; older rows and clients used
/// `unsure`, which is accepted on input and normalized to `Maybe`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    Yes,
    No,
    #[serde(alias = "unsure")]
    Maybe,
}

impl Attendance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Attendance::Yes => "yes",
            Attendance::No => "no",
            Attendance::Maybe => "maybe",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "yes" => Some(Attendance::Yes),
            "no" => Some(Attendance::No),
            "maybe" | "unsure" => Some(Attendance::Maybe),
            _ => None,
        }
    }
}

/// A member's RSVP to an event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub id: String,
    pub event_id: String,
    pub name: String,
    /// Food contribution, may be empty.
    #[serde(default)]
    pub food: String,
    /// Tech content the member plans to share, may be empty.
    #[serde(default)]
    pub content: String,
    pub attendance: Attendance,
    /// Set at creation, immutable thereafter.
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a new RSVP.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRsvpRequest {
    pub event_id: String,
    pub name: String,
    #[serde(default)]
    pub food: String,
    #[serde(default)]
    pub content: String,
    pub attendance: Attendance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_round_trip() {
        for (s, v) in [
            ("yes", Attendance::Yes),
            ("no", Attendance::No),
            ("maybe", Attendance::Maybe),
        ] {
            assert_eq!(Attendance::from_str(s), Some(v));
            assert_eq!(v.as_str(), s);
        }
    }

    #[test]
    fn test_attendance_unsure_alias() {
        assert_eq!(Attendance::from_str("unsure"), Some(Attendance::Maybe));

        let parsed: Attendance = serde_json::from_str("\"unsure\"").unwrap();
        assert_eq!(parsed, Attendance::Maybe);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"maybe\"");
    }

    #[test]
    fn test_attendance_rejects_unknown_value() {
        assert_eq!(Attendance::from_str("perhaps"), None);
        assert!(serde_json::from_str::<Attendance>("\"perhaps\"").is_err());
    }
}
