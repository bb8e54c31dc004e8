//! Downloadable JSON projection of an analysis
//!
//! The export document carries the analysis records plus a run id and a UTC
//! timestamp. There is no schema version: the document is a convenience
//! snapshot, not an interchange format.

use crate::model::{Clause, ContractAnalysis, Entity, OverallRisk, Relationship};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced while exporting an analysis
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// A self-contained export of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisExport {
    /// Random id for this export
    pub id: Uuid,
    pub summary: String,
    pub overall_risk: OverallRisk,
    pub entities: Vec<Entity>,
    pub clauses: Vec<Clause>,
    pub relationships: Vec<Relationship>,
    /// When the export was produced
    pub timestamp: DateTime<Utc>,
}

impl AnalysisExport {
    /// Snapshot an analysis, stamping a fresh id and the current time
    pub fn new(analysis: &ContractAnalysis) -> Self {
        Self {
            id: Uuid::new_v4(),
            summary: analysis.summary.clone(),
            overall_risk: analysis.overall_risk,
            entities: analysis.entities.clone(),
            clauses: analysis.clauses.clone(),
            relationships: analysis.relationships.clone(),
            timestamp: Utc::now(),
        }
    }

    /// Pretty-printed JSON document
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a previously exported document
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the JSON document to disk
    pub fn write_to(&self, path: &Path) -> Result<(), ExportError> {
        std::fs::write(path, self.to_json()?)?;
        tracing::debug!(path = %path.display(), "wrote analysis export");
        Ok(())
    }
}
