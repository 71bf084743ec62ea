//! Intent resource shape.

use serde::{Deserialize, Serialize};

/// The intent that matched a conversational query.
///
/// Only a subset of fields is populated in detect-intent responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Unique identifier, `projects/{project}/agent/intents/{intent}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable intent name.
    pub display_name: String,
}
