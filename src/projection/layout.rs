//! Static layout arithmetic for the diagram projection
//!
//! Entities sit on one horizontal row; clauses are partitioned into three
//! risk buckets, each laid out as a two-column grid at a bucket-specific
//! x-origin. The heuristic does not guarantee non-overlap for dense graphs.

use crate::model::RiskLevel;
use serde::Serialize;

/// 2D canvas position of a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

const ENTITY_X_ORIGIN: f32 = 200.0;
const ENTITY_X_STEP: f32 = 300.0;
const ENTITY_ROW_Y: f32 = 100.0;

const CLAUSE_GRID_Y: f32 = 300.0;
const CLAUSE_COL_STEP: f32 = 250.0;
const CLAUSE_ROW_STEP: f32 = 180.0;

/// X-origin of the risk bucket a clause lands in
fn bucket_origin(risk: RiskLevel) -> f32 {
    match risk {
        RiskLevel::Safe => 100.0,
        RiskLevel::Warning => 400.0,
        RiskLevel::Danger => 700.0,
    }
}

/// Position of the Nth entity (0-based) on the entity row
pub(crate) fn entity_position(index: usize) -> Position {
    Position {
        x: ENTITY_X_ORIGIN + index as f32 * ENTITY_X_STEP,
        y: ENTITY_ROW_Y,
    }
}

/// Position of the Nth clause (0-based) within its risk bucket
pub(crate) fn clause_position(risk: RiskLevel, index: usize) -> Position {
    Position {
        x: bucket_origin(risk) + (index % 2) as f32 * CLAUSE_COL_STEP,
        y: CLAUSE_GRID_Y + (index / 2) as f32 * CLAUSE_ROW_STEP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_spread_along_one_row() {
        assert_eq!(entity_position(0), Position { x: 200.0, y: 100.0 });
        assert_eq!(entity_position(1), Position { x: 500.0, y: 100.0 });
        assert_eq!(entity_position(2), Position { x: 800.0, y: 100.0 });
    }

    #[test]
    fn clause_buckets_form_two_column_grids() {
        assert_eq!(
            clause_position(RiskLevel::Safe, 0),
            Position { x: 100.0, y: 300.0 }
        );
        assert_eq!(
            clause_position(RiskLevel::Safe, 1),
            Position { x: 350.0, y: 300.0 }
        );
        assert_eq!(
            clause_position(RiskLevel::Safe, 2),
            Position { x: 100.0, y: 480.0 }
        );
        assert_eq!(
            clause_position(RiskLevel::Warning, 0),
            Position { x: 400.0, y: 300.0 }
        );
        assert_eq!(
            clause_position(RiskLevel::Danger, 3),
            Position { x: 950.0, y: 480.0 }
        );
    }
}
