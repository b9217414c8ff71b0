//! Per-hole score repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::hole_scores_sea as hole_scores_adapter;
use crate::domain::Scorecard;
use crate::entities::hole_scores;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleScore {
    pub id: i64,
    pub round_id: i64,
    pub hole_number: i32,
    pub gross_score: i32,
    pub nett_score: Option<i32>,
    pub stableford_points: Option<i32>,
}

impl From<hole_scores::Model> for HoleScore {
    fn from(model: hole_scores::Model) -> Self {
        Self {
            id: model.id,
            round_id: model.round_id,
            hole_number: model.hole_number,
            gross_score: model.gross_score,
            nett_score: model.nett_score,
            stableford_points: model.stableford_points,
        }
    }
}

/// Holes of one round, hole 1 first.
pub async fn list_for_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<HoleScore>, DomainError> {
    let rows = hole_scores_adapter::list_for_round(conn, round_id).await?;
    Ok(rows.into_iter().map(HoleScore::from).collect())
}

pub async fn list_for_rounds<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_ids: &[i64],
) -> Result<Vec<HoleScore>, DomainError> {
    let rows = hole_scores_adapter::list_for_rounds(conn, round_ids).await?;
    Ok(rows.into_iter().map(HoleScore::from).collect())
}

/// Upsert every hole on the card by `(round_id, hole_number)`.
pub async fn save_scorecard<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    card: &Scorecard,
) -> Result<(), DomainError> {
    for hole in &card.holes {
        hole_scores_adapter::upsert(
            conn,
            hole_scores_adapter::HoleScoreUpsert {
                round_id,
                hole_number: hole.hole_number,
                gross_score: hole.gross,
                nett_score: hole.nett,
                stableford_points: hole.stableford,
            },
        )
        .await?;
    }
    Ok(())
}
