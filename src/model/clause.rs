//! Contract clauses and their per-clause risk classification

use super::entity::EntityId;
use serde::{Deserialize, Serialize};

/// Unique identifier for a clause within one analysis run
///
/// Serializes as a plain string (`"clause-2"`), sequential in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClauseId(String);

impl ClauseId {
    /// Create the id for the Nth emitted clause (1-based)
    pub fn from_index(index: usize) -> Self {
        Self(format!("clause-{}", index))
    }

    /// Create a ClauseId from a string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClauseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClauseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ClauseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Clause category assigned by the matching heuristic rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClauseKind {
    Payment,
    Termination,
    Liability,
    Confidentiality,
    Maintenance,
    Security,
    Other,
}

impl ClauseKind {
    /// Display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            ClauseKind::Payment => "Payment",
            ClauseKind::Termination => "Termination",
            ClauseKind::Liability => "Liability",
            ClauseKind::Confidentiality => "Confidentiality",
            ClauseKind::Maintenance => "Maintenance",
            ClauseKind::Security => "Security",
            ClauseKind::Other => "Other",
        }
    }
}

/// Risk classification for a single clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Warning,
    Danger,
}

impl RiskLevel {
    /// Lowercase label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Warning => "warning",
            RiskLevel::Danger => "danger",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// A contract provision matched by keyword or section heuristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clause {
    /// Unique identifier within the run
    pub id: ClauseId,
    /// Human-readable title ("Payment Terms", "SUBLETTING")
    pub title: String,
    /// Clause category
    #[serde(rename = "type")]
    pub kind: ClauseKind,
    /// Excerpted text the clause was matched from
    pub content: String,
    /// Risk level assigned by the rule's assessor
    pub risk_level: RiskLevel,
    /// Natural-language explanation of the assessment
    pub explanation: String,
    /// Entities involved in this clause; references sibling entities only
    pub entities: Vec<EntityId>,
    /// Topically related clauses; populated symmetrically after extraction
    pub related_clauses: Vec<ClauseId>,
}

impl Clause {
    /// Whether the clause needs reviewer attention
    pub fn is_risky(&self) -> bool {
        self.risk_level != RiskLevel::Safe
    }
}
