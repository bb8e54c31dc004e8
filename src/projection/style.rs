//! Visual encodings for diagram edges
//!
//! One fixed lookup table keyed on relationship kind; membership edges (an
//! entity appearing in a clause's entity list) get a single low-emphasis
//! style.

use crate::model::RelationKind;
use serde::Serialize;

/// Stroke styling for a rendered edge
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    /// CSS color of the stroke
    pub stroke: &'static str,
    pub stroke_width: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_dasharray: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

/// Style for a relationship edge, by kind
pub(crate) fn relation_style(kind: RelationKind) -> EdgeStyle {
    match kind {
        RelationKind::Obligation => EdgeStyle {
            stroke: "#10b981",
            stroke_width: 3.0,
            stroke_dasharray: Some("5,5"),
            opacity: None,
        },
        RelationKind::Right => EdgeStyle {
            stroke: "#3b82f6",
            stroke_width: 3.0,
            stroke_dasharray: None,
            opacity: None,
        },
        RelationKind::Dependency => EdgeStyle {
            stroke: "#8b5cf6",
            stroke_width: 2.0,
            stroke_dasharray: Some("10,5"),
            opacity: None,
        },
        RelationKind::Conflict => EdgeStyle {
            stroke: "#ef4444",
            stroke_width: 4.0,
            stroke_dasharray: Some("15,5"),
            opacity: None,
        },
    }
}

/// Low-emphasis style for entity-clause membership edges
pub(crate) fn membership_style() -> EdgeStyle {
    EdgeStyle {
        stroke: "#6b7280",
        stroke_width: 1.0,
        stroke_dasharray: None,
        opacity: Some(0.6),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_gets_a_distinct_stroke() {
        let kinds = [
            RelationKind::Obligation,
            RelationKind::Right,
            RelationKind::Dependency,
            RelationKind::Conflict,
        ];
        let strokes: Vec<&str> = kinds.iter().map(|k| relation_style(*k).stroke).collect();
        let mut deduped = strokes.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), kinds.len());
    }

    #[test]
    fn conflict_is_the_heaviest_stroke() {
        assert_eq!(relation_style(RelationKind::Conflict).stroke_width, 4.0);
        assert_eq!(membership_style().stroke_width, 1.0);
        assert_eq!(membership_style().opacity, Some(0.6));
    }
}
