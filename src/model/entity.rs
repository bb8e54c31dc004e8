//! Contracting parties inferred from document text

use serde::{Deserialize, Serialize};

/// Unique identifier for an entity within one analysis run
///
/// Serializes as a plain string (`"entity-3"`). Ids are sequential in
/// extraction order and only meaningful inside the run that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Create the id for the Nth extracted entity (1-based)
    pub fn from_index(index: usize) -> Self {
        Self(format!("entity-{}", index))
    }

    /// Create an EntityId from a string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// What kind of party an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Person,
    Company,
    Organization,
    Government,
}

/// A contracting party inferred from the text
///
/// Entities are created once per analysis run, deduplicated by name during
/// extraction, and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Unique identifier within the run
    pub id: EntityId,
    /// Canonical display name ("Landlord", "TechCorp Solutions Pvt Ltd")
    pub name: String,
    /// Kind of party
    #[serde(rename = "type")]
    pub kind: EntityKind,
    /// Contractual role ("Lessor", "Employer", "Party")
    pub role: String,
    /// Short free-text description
    pub description: String,
}

impl Entity {
    /// Create an entity with the given sequential index
    pub fn new(
        index: usize,
        name: impl Into<String>,
        kind: EntityKind,
        role: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: EntityId::from_index(index),
            name: name.into(),
            kind,
            role: role.into(),
            description: description.into(),
        }
    }
}
