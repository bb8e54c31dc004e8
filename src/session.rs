//! The interactive session owning the active analysis
//!
//! One analysis is live at a time. Running a new one replaces the previous
//! analysis and its graph view wholesale; there is no merging or incremental
//! update. Node selection resolves against the current view, feeding the
//! detail panel.

use crate::analysis::ContractAnalyzer;
use crate::model::ContractAnalysis;
use crate::projection::{project, GraphNode, GraphView};

/// A single-user analysis session
pub struct Session {
    analyzer: ContractAnalyzer,
    current: Option<(ContractAnalysis, GraphView)>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with a default analyzer
    pub fn new() -> Self {
        Self::with_analyzer(ContractAnalyzer::new())
    }

    /// Create a session around a configured analyzer
    pub fn with_analyzer(analyzer: ContractAnalyzer) -> Self {
        Self {
            analyzer,
            current: None,
        }
    }

    /// Analyze `text`, replacing the previous analysis and view wholesale
    pub fn analyze(&mut self, text: &str) -> &ContractAnalysis {
        let analysis = self.analyzer.analyze(text);
        let view = project(&analysis);
        let (analysis, _) = self.current.insert((analysis, view));
        analysis
    }

    /// The active analysis, if any
    pub fn analysis(&self) -> Option<&ContractAnalysis> {
        self.current.as_ref().map(|(analysis, _)| analysis)
    }

    /// The active graph view, if any
    pub fn view(&self) -> Option<&GraphView> {
        self.current.as_ref().map(|(_, view)| view)
    }

    /// Resolve a clicked node against the active view
    pub fn select(&self, node_id: &str) -> Option<&GraphNode> {
        self.view()?.node(node_id)
    }

    /// Drop the active analysis
    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::NodeData;

    #[test]
    fn a_new_run_supersedes_the_previous_one() {
        let mut session = Session::new();
        session.analyze("The landlord and tenant agree on monthly rent.");
        let first_count = session.analysis().unwrap().clauses.len();

        session.analyze("The employee shall maintain strict confidentiality.");
        let analysis = session.analysis().unwrap();
        assert!(analysis.entities.iter().any(|e| e.name == "Employee"));
        assert!(analysis.entities.iter().all(|e| e.name != "Landlord"));
        // View is rebuilt alongside the analysis.
        assert_eq!(
            session.view().unwrap().nodes.len(),
            analysis.entities.len() + analysis.clauses.len()
        );
        let _ = first_count;
    }

    #[test]
    fn select_resolves_nodes_in_the_active_view() {
        let mut session = Session::new();
        assert!(session.select("entity-1").is_none());

        session.analyze("The landlord and tenant agree on monthly rent.");
        let node = session.select("entity-1").expect("entity node");
        match &node.data {
            NodeData::Entity { label, .. } => assert_eq!(label, "Landlord"),
            NodeData::Clause { .. } => panic!("expected entity payload"),
        }
        assert!(session.select("entity-99").is_none());
    }

    #[test]
    fn clear_drops_the_active_analysis() {
        let mut session = Session::new();
        session.analyze("monthly rent applies");
        session.clear();
        assert!(session.analysis().is_none());
        assert!(session.view().is_none());
    }
}
