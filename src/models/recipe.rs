//! Recipe upload metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uploaded recipe file. The bytes themselves are stored as a BLOB and
/// served separately; list responses carry metadata only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Request body for uploading a recipe. `file_data` is base64-encoded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub name: String,
    pub file_name: String,
    pub file_data: String,
}
