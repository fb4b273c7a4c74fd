//! Calendar occurrence model.
//!
//! Occurrences are derived from the external iCalendar feed on every fetch
//! and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One concrete instance of a calendar event, after expanding any
/// recurrence rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarOccurrence {
    pub title: String,
    pub start: DateTime<Utc>,
    /// None means "point in time, no duration".
    pub end: Option<DateTime<Utc>>,
    pub description: String,
    pub location: String,
}
