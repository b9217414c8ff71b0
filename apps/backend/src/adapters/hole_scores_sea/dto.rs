//! DTOs for hole_scores_sea adapter.

/// One scored hole to upsert by `(round_id, hole_number)`.
#[derive(Debug, Clone, Copy)]
pub struct HoleScoreUpsert {
    pub round_id: i64,
    pub hole_number: i32,
    pub gross_score: i32,
    pub nett_score: i32,
    pub stableford_points: i32,
}
