//! Conversation contexts.

use serde::{Deserialize, Serialize};

/// A context active within a session.
///
/// `name` is the full resource path,
/// `projects/{project}/agent/sessions/{session}/contexts/{context}` or the
/// environment/user-scoped equivalent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    pub name: String,
    /// Number of queries the context stays active for. A context with
    /// lifespan 0 expires immediately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifespan_count: Option<i32>,
    /// Parameters carried by the context. Arbitrary JSON object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lifespan_count: None,
            parameters: None,
        }
    }
}
