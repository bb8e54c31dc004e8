//! Derived links between entities and clauses

use serde::{Deserialize, Serialize};

/// Kind of relationship between two analysis records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// Entity -> clause: the entity has obligations under the clause
    Obligation,
    /// Entity -> clause: the entity holds a right under the clause
    Right,
    /// Clause -> clause: topical keyword overlap
    Dependency,
    /// Clause -> clause: terms pull in opposite directions
    Conflict,
}

impl RelationKind {
    /// Capitalized display label, used for edge labels in the projection
    pub fn label(&self) -> &'static str {
        match self {
            RelationKind::Obligation => "Obligation",
            RelationKind::Right => "Right",
            RelationKind::Dependency => "Dependency",
            RelationKind::Conflict => "Conflict",
        }
    }
}

/// A directed link between two records of the analysis
///
/// `from` and `to` hold entity or clause ids depending on the kind; both sides
/// always reference records present in the owning [`ContractAnalysis`].
///
/// [`ContractAnalysis`]: super::ContractAnalysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub kind: RelationKind,
    pub description: String,
}

impl Relationship {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        kind: RelationKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind,
            description: description.into(),
        }
    }
}
