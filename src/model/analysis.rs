//! The analysis aggregate and overall risk classification

use super::clause::{Clause, ClauseId, RiskLevel};
use super::entity::{Entity, EntityId};
use super::relationship::Relationship;
use serde::{Deserialize, Serialize};

/// Aggregate risk classification for a whole document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallRisk {
    Low,
    Medium,
    High,
}

impl OverallRisk {
    /// Lowercase label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            OverallRisk::Low => "low",
            OverallRisk::Medium => "medium",
            OverallRisk::High => "high",
        }
    }

    /// Deterministic thresholding over per-clause risk counts.
    ///
    /// More than two danger clauses, or any danger alongside more than three
    /// warnings, classifies the document high; any danger or more than two
    /// warnings classifies it medium; everything else is low.
    pub fn from_counts(danger: usize, warning: usize) -> Self {
        if danger > 2 || (danger > 0 && warning > 3) {
            OverallRisk::High
        } else if danger > 0 || warning > 2 {
            OverallRisk::Medium
        } else {
            OverallRisk::Low
        }
    }

    /// Classify from a clause set
    pub fn from_clauses(clauses: &[Clause]) -> Self {
        let danger = clauses
            .iter()
            .filter(|c| c.risk_level == RiskLevel::Danger)
            .count();
        let warning = clauses
            .iter()
            .filter(|c| c.risk_level == RiskLevel::Warning)
            .count();
        Self::from_counts(danger, warning)
    }
}

impl std::fmt::Display for OverallRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// The aggregate result of one analysis run
///
/// Wholly owned by the run that produced it; a new run supersedes it in full.
/// There is no incremental update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAnalysis {
    /// Parties inferred from the text (never empty; placeholders if needed)
    pub entities: Vec<Entity>,
    /// Provisions matched by keyword or section heuristics
    pub clauses: Vec<Clause>,
    /// Derived entity-clause and clause-clause links
    pub relationships: Vec<Relationship>,
    /// Aggregate risk classification
    pub overall_risk: OverallRisk,
    /// One-sentence templated summary
    pub summary: String,
}

impl ContractAnalysis {
    /// Look up an entity by id
    pub fn entity(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| &e.id == id)
    }

    /// Look up a clause by id
    pub fn clause(&self, id: &ClauseId) -> Option<&Clause> {
        self.clauses.iter().find(|c| &c.id == id)
    }

    /// Number of clauses that need reviewer attention
    pub fn risky_clause_count(&self) -> usize {
        self.clauses.iter().filter(|c| c.is_risky()).count()
    }
}
