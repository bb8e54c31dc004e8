//! Clausegraph: heuristic contract analysis with risk-graph projection
//!
//! Takes raw contract text, runs a fixed set of keyword and regex heuristics
//! to infer parties, clauses, per-clause risk levels, and relationships, and
//! projects the result into a positioned node/edge diagram description for an
//! external renderer.
//!
//! # Core Concepts
//!
//! - **Entities**: contracting parties inferred from the text
//! - **Clauses**: provisions matched by keyword or section heuristics, each
//!   carrying a risk level and an explanation
//! - **Projection**: deterministic layout and styling of the analysis as a
//!   node graph, rebuilt wholesale on every run
//!
//! # Example
//!
//! ```
//! use clausegraph::{project, ContractAnalyzer};
//!
//! let analyzer = ContractAnalyzer::new();
//! let analysis = analyzer.analyze("The tenant shall pay monthly rent.");
//! let view = project(&analysis);
//! assert_eq!(view.nodes.len(), analysis.entities.len() + analysis.clauses.len());
//! ```

pub mod analysis;
pub mod export;
pub mod ingest;
mod model;
pub mod projection;
pub mod samples;
pub mod session;

pub use analysis::{AnalysisConfig, ContractAnalyzer, Milestone, RiskScope};
pub use export::{AnalysisExport, ExportError};
pub use ingest::{read_document, DocumentKind, IngestError};
pub use model::{
    Clause, ClauseId, ClauseKind, ContractAnalysis, Entity, EntityId, EntityKind, OverallRisk,
    RelationKind, Relationship, RiskLevel,
};
pub use projection::{project, GraphEdge, GraphNode, GraphView, NodeData};
pub use session::Session;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
