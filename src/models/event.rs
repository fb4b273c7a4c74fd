//! Event model matching the frontend Event interface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A group event that members can RSVP to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    /// When the event takes place (RFC 3339, UTC).
    pub date: DateTime<Utc>,
}

/// Request body for creating a new event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub name: String,
    pub date: DateTime<Utc>,
}
