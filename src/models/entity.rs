//! Session entity types.

use serde::{Deserialize, Serialize};

/// One entry of an entity type: a primary value plus its synonyms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Primary value, or a reference value for map-kind entity types.
    pub value: String,
    /// Synonyms resolving to `value`. List-kind entity types carry
    /// exactly one synonym equal to the value.
    pub synonyms: Vec<String>,
}

impl Entity {
    pub fn new(value: impl Into<String>, synonyms: Vec<String>) -> Self {
        Self {
            value: value.into(),
            synonyms,
        }
    }
}

/// A session-scoped entity type, extending or replacing a developer
/// entity type for the duration of one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEntityType {
    /// Full resource path ending in the display name of the entity type
    /// being overridden or supplemented.
    pub name: String,
    /// Whether `entities` overrides or supplements the custom entity type.
    pub entity_override_mode: EntityOverrideMode,
    /// The entities associated with this session entity type.
    pub entities: Vec<Entity>,
}

/// The kinds of modification a session entity type can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityOverrideMode {
    #[serde(rename = "ENTITY_OVERRIDE_MODE_UNSPECIFIED")]
    Unspecified,
    /// Session entities replace the custom entity type's collection.
    #[serde(rename = "ENTITY_OVERRIDE_MODE_OVERRIDE")]
    Override,
    /// Session entities extend the custom entity type's collection.
    #[serde(rename = "ENTITY_OVERRIDE_MODE_SUPPLEMENT")]
    Supplement,
}
