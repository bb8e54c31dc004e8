//! The contract analyzer service
//!
//! An explicitly constructed, stateless service: rule tables are compiled at
//! construction, and every call to [`ContractAnalyzer::analyze`] produces a
//! fresh [`ContractAnalysis`] from scratch. The pipeline is synchronous and
//! total — malformed input degrades to placeholder output rather than failing.

use super::clauses::{extract_keyword_clauses, extract_section_clauses, ClauseExtraction};
use super::entities::extract_entities;
use super::linking::{derive_relationships, link_related_clauses};
use super::rules::RuleSet;
use super::types::{AnalysisConfig, Milestone};
use crate::model::{Clause, ContractAnalysis, Entity, OverallRisk};

/// Heuristic contract analyzer
///
/// # Example
///
/// ```
/// use clausegraph::ContractAnalyzer;
///
/// let analyzer = ContractAnalyzer::new();
/// let analysis = analyzer.analyze("The tenant shall pay monthly rent of INR 25,000.");
/// assert!(!analysis.entities.is_empty());
/// ```
pub struct ContractAnalyzer {
    config: AnalysisConfig,
    rules: RuleSet,
}

impl Default for ContractAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractAnalyzer {
    /// Create an analyzer with the default configuration
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::new())
    }

    /// Create an analyzer with a specific configuration
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            config,
            rules: RuleSet::new(),
        }
    }

    /// The active configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze contract text into a fresh [`ContractAnalysis`]
    ///
    /// Deterministic: identical input yields identical output. Never fails;
    /// text with no recognizable parties or provisions yields placeholder
    /// entities and an empty clause set.
    pub fn analyze(&self, text: &str) -> ContractAnalysis {
        self.analyze_with_progress(text, |_| {})
    }

    /// Analyze, reporting each completed pipeline stage through `progress`
    pub fn analyze_with_progress(
        &self,
        text: &str,
        mut progress: impl FnMut(Milestone),
    ) -> ContractAnalysis {
        let scope = self.config.risk_scope;

        let entities = extract_entities(text, &self.rules);
        tracing::debug!(count = entities.len(), "extracted entities");
        progress(Milestone::Entities);

        let mut extraction = ClauseExtraction::new();
        extract_keyword_clauses(text, &entities, &self.rules, scope, &mut extraction);
        tracing::debug!(count = extraction.clauses.len(), "extracted keyword clauses");
        progress(Milestone::Clauses);

        extract_section_clauses(text, &entities, &self.rules, scope, &mut extraction);
        tracing::debug!(count = extraction.clauses.len(), "clauses after section scan");
        progress(Milestone::Sections);

        let ClauseExtraction {
            mut clauses,
            keyword_sets,
        } = extraction;
        link_related_clauses(&mut clauses, &keyword_sets);
        let relationships = derive_relationships(&entities, &clauses);
        tracing::debug!(count = relationships.len(), "derived relationships");
        progress(Milestone::Linking);

        let overall_risk = OverallRisk::from_clauses(&clauses);
        let summary = summarize(&entities, &clauses, overall_risk);
        progress(Milestone::Aggregation);

        ContractAnalysis {
            entities,
            clauses,
            relationships,
            overall_risk,
            summary,
        }
    }
}

fn summarize(entities: &[Entity], clauses: &[Clause], overall_risk: OverallRisk) -> String {
    let risky = clauses.iter().filter(|c| c.is_risky()).count();
    format!(
        "This contract involves {} parties with {} key clauses. {} clauses require attention due to potential risks. Overall risk level: {}.",
        entities.len(),
        clauses.len(),
        risky,
        overall_risk
    )
}
