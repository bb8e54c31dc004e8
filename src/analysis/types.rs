//! Configuration and progress types for the analysis pipeline

/// How much text a risk assessor may scan
///
/// With `Document`, a keyword anywhere in the text can flip an unrelated
/// clause's risk level; `Clause` confines each assessor to the clause's own
/// excerpt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RiskScope {
    /// Assessors scan the full document text
    #[default]
    Document,
    /// Assessors scan only the clause excerpt
    Clause,
}

/// Configuration for an analysis run
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    /// Scope handed to the per-clause risk assessors
    pub risk_scope: RiskScope,
}

impl AnalysisConfig {
    /// Default configuration: document-wide risk scanning
    pub fn new() -> Self {
        Self::default()
    }

    /// Confine risk assessors to each clause's excerpt
    pub fn clause_scoped() -> Self {
        Self {
            risk_scope: RiskScope::Clause,
        }
    }
}

/// Pipeline stages reported while an analysis runs
///
/// Milestones fire in declaration order, once each, when the stage's work has
/// actually finished. They exist so a progress indicator can track real
/// pipeline position instead of a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    /// Entity extraction finished
    Entities,
    /// Keyword clause extraction finished
    Clauses,
    /// Numbered-section scan finished
    Sections,
    /// Related-clause linking and relationship derivation finished
    Linking,
    /// Aggregate risk and summary computed
    Aggregation,
}

impl Milestone {
    /// All milestones in firing order
    pub const ALL: [Milestone; 5] = [
        Milestone::Entities,
        Milestone::Clauses,
        Milestone::Sections,
        Milestone::Linking,
        Milestone::Aggregation,
    ];

    /// Short human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Milestone::Entities => "entity extraction",
            Milestone::Clauses => "clause extraction",
            Milestone::Sections => "section scan",
            Milestone::Linking => "relation linking",
            Milestone::Aggregation => "risk aggregation",
        }
    }

    /// Rough share of the pipeline completed after this stage
    pub fn percent(&self) -> u8 {
        match self {
            Milestone::Entities => 20,
            Milestone::Clauses => 45,
            Milestone::Sections => 65,
            Milestone::Linking => 85,
            Milestone::Aggregation => 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestones_progress_monotonically() {
        let mut previous = 0;
        for milestone in Milestone::ALL {
            assert!(milestone.percent() > previous);
            previous = milestone.percent();
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn default_config_scans_the_document() {
        assert_eq!(AnalysisConfig::new().risk_scope, RiskScope::Document);
        assert_eq!(AnalysisConfig::clause_scoped().risk_scope, RiskScope::Clause);
    }
}
