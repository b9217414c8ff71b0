//! DTOs for rounds_sea adapter.

use time::Date;

/// DTO for creating a round. Summary columns start null.
#[derive(Debug, Clone)]
pub struct RoundCreate {
    pub tournament_id: i64,
    pub player_id: i64,
    pub course_id: i64,
    pub round_number: i32,
    pub date_played: Date,
    pub player_handicap_index: Option<f64>,
    pub player_playing_handicap: Option<i32>,
}

/// Optional filters for listing rounds; `None` means "any".
#[derive(Debug, Clone, Default)]
pub struct RoundFilter {
    pub tournament_id: Option<i64>,
    pub player_id: Option<i64>,
    pub course_id: Option<i64>,
    pub round_number: Option<i32>,
    pub player_ids: Option<Vec<i64>>,
}

/// The nine summary columns, written together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundTotals {
    pub gross_front9: i32,
    pub gross_back9: i32,
    pub gross_total: i32,
    pub nett_front9: i32,
    pub nett_back9: i32,
    pub nett_total: i32,
    pub stableford_front9: i32,
    pub stableford_back9: i32,
    pub stableford_total: i32,
}
