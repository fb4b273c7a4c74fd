//! Shared tech content upload metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uploaded piece of shared tech content (slides, links, notes).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedContent {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Request body for uploading shared content. `file_data` is base64-encoded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSharedContentRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub file_name: String,
    pub file_data: String,
}
