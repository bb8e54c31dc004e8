//! Graph projection: positioned nodes and styled edges for display
//!
//! Maps a [`ContractAnalysis`] into a node/edge diagram description consumed
//! by an external renderer. The projection is presentation-only: it is never
//! a source of truth, and it is recomputed wholesale from the analysis on
//! every pass. Given the same analysis, [`project`] is deterministic and
//! side-effect-free.

mod layout;
mod style;

pub use layout::Position;
pub use style::EdgeStyle;

use crate::model::{
    ClauseKind, ContractAnalysis, EntityId, EntityKind, RelationKind, RiskLevel,
};
use serde::Serialize;

/// Which renderer component draws a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GraphNodeKind {
    /// A contracting party
    #[serde(rename = "entityNode")]
    Entity,
    /// A clause, colored by risk level
    #[serde(rename = "riskNode")]
    Risk,
}

/// Payload shown on and around a node
///
/// Carries everything the selected-node detail view needs, so a click never
/// has to reach back into the analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeData {
    #[serde(rename_all = "camelCase")]
    Entity {
        label: String,
        role: String,
        description: String,
        #[serde(rename = "type")]
        kind: EntityKind,
    },
    #[serde(rename_all = "camelCase")]
    Clause {
        label: String,
        subtitle: ClauseKind,
        risk: RiskLevel,
        explanation: String,
        original_text: String,
        entities: Vec<EntityId>,
    },
}

/// A positioned node of the diagram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: GraphNodeKind,
    pub position: Position,
    pub data: NodeData,
}

/// A styled edge of the diagram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub style: EdgeStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub animated: bool,
}

/// The full diagram description for one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct GraphView {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphView {
    /// Look up a node by id, feeding the selected-node detail view
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Project an analysis into positioned nodes and styled edges
pub fn project(analysis: &ContractAnalysis) -> GraphView {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    for (index, entity) in analysis.entities.iter().enumerate() {
        nodes.push(GraphNode {
            id: entity.id.as_str().to_string(),
            kind: GraphNodeKind::Entity,
            position: layout::entity_position(index),
            data: NodeData::Entity {
                label: entity.name.clone(),
                role: entity.role.clone(),
                description: entity.description.clone(),
                kind: entity.kind,
            },
        });
    }

    // Each risk bucket is laid out independently, left to right by severity.
    for risk in [RiskLevel::Safe, RiskLevel::Warning, RiskLevel::Danger] {
        let bucket = analysis.clauses.iter().filter(|c| c.risk_level == risk);
        for (index, clause) in bucket.enumerate() {
            nodes.push(GraphNode {
                id: clause.id.as_str().to_string(),
                kind: GraphNodeKind::Risk,
                position: layout::clause_position(risk, index),
                data: NodeData::Clause {
                    label: clause.title.clone(),
                    subtitle: clause.kind,
                    risk: clause.risk_level,
                    explanation: clause.explanation.clone(),
                    original_text: clause.content.clone(),
                    entities: clause.entities.clone(),
                },
            });
        }
    }

    for (index, rel) in analysis.relationships.iter().enumerate() {
        edges.push(GraphEdge {
            id: format!("edge-{}", index),
            source: rel.from.clone(),
            target: rel.to.clone(),
            style: style::relation_style(rel.kind),
            label: Some(rel.kind.label()),
            animated: rel.kind == RelationKind::Conflict,
        });
    }

    // Membership edges for entity-clause pairs not already connected.
    for entity in &analysis.entities {
        for clause in &analysis.clauses {
            if !clause.entities.contains(&entity.id) {
                continue;
            }
            let exists = edges
                .iter()
                .any(|e| e.source == entity.id.as_str() && e.target == clause.id.as_str());
            if exists {
                continue;
            }
            edges.push(GraphEdge {
                id: format!("auto-edge-{}-{}", entity.id, clause.id),
                source: entity.id.as_str().to_string(),
                target: clause.id.as_str().to_string(),
                style: style::membership_style(),
                label: None,
                animated: false,
            });
        }
    }

    GraphView { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ContractAnalyzer;

    fn analyzed() -> ContractAnalysis {
        ContractAnalyzer::new().analyze(
            "The landlord and tenant agree: monthly rent applies, a deposit of four (4) months rent in advance is required, and the tenant is responsible for repair of structural damage.",
        )
    }

    #[test]
    fn projection_is_deterministic() {
        let analysis = analyzed();
        assert_eq!(project(&analysis), project(&analysis));
    }

    #[test]
    fn every_record_projects_to_one_node() {
        let analysis = analyzed();
        let view = project(&analysis);
        assert_eq!(
            view.nodes.len(),
            analysis.entities.len() + analysis.clauses.len()
        );
        for entity in &analysis.entities {
            assert!(view.node(entity.id.as_str()).is_some());
        }
        for clause in &analysis.clauses {
            assert!(view.node(clause.id.as_str()).is_some());
        }
    }

    #[test]
    fn no_duplicate_entity_clause_edges() {
        let view = project(&analyzed());
        for (i, edge) in view.edges.iter().enumerate() {
            for other in &view.edges[i + 1..] {
                assert!(
                    !(edge.source == other.source && edge.target == other.target),
                    "duplicate edge {} -> {}",
                    edge.source,
                    edge.target
                );
            }
        }
    }

    #[test]
    fn clause_nodes_carry_detail_payload() {
        let analysis = analyzed();
        let view = project(&analysis);
        let deposit = analysis
            .clauses
            .iter()
            .find(|c| c.title == "Security Deposit")
            .unwrap();
        let node = view.node(deposit.id.as_str()).unwrap();
        assert_eq!(node.kind, GraphNodeKind::Risk);
        match &node.data {
            NodeData::Clause {
                label,
                risk,
                explanation,
                ..
            } => {
                assert_eq!(label, "Security Deposit");
                assert_eq!(*risk, RiskLevel::Danger);
                assert!(explanation.contains("exceeds the legal limit"));
            }
            NodeData::Entity { .. } => panic!("expected clause payload"),
        }
    }

    #[test]
    fn serializes_with_renderer_field_names() {
        let view = project(&analyzed());
        let json = serde_json::to_value(&view).unwrap();
        let first_node = &json["nodes"][0];
        assert_eq!(first_node["type"], "entityNode");
        assert!(first_node["position"]["x"].is_number());

        let first_edge = &json["edges"][0];
        assert_eq!(first_edge["label"], "Obligation");
        assert_eq!(first_edge["style"]["stroke"], "#10b981");
        assert_eq!(first_edge["style"]["strokeDasharray"], "5,5");
    }
}
