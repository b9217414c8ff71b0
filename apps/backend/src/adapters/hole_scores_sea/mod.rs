//! SeaORM adapter for per-hole scores.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use crate::entities::hole_scores;

pub mod dto;

pub use dto::HoleScoreUpsert;

pub async fn list_for_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<hole_scores::Model>, sea_orm::DbErr> {
    hole_scores::Entity::find()
        .filter(hole_scores::Column::RoundId.eq(round_id))
        .order_by_asc(hole_scores::Column::HoleNumber)
        .all(conn)
        .await
}

pub async fn list_for_rounds<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_ids: &[i64],
) -> Result<Vec<hole_scores::Model>, sea_orm::DbErr> {
    if round_ids.is_empty() {
        return Ok(Vec::new());
    }
    hole_scores::Entity::find()
        .filter(hole_scores::Column::RoundId.is_in(round_ids.iter().copied()))
        .order_by_asc(hole_scores::Column::RoundId)
        .order_by_asc(hole_scores::Column::HoleNumber)
        .all(conn)
        .await
}

/// Insert or overwrite the row for `(round_id, hole_number)`.
pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: HoleScoreUpsert,
) -> Result<(), sea_orm::DbErr> {
    let active = hole_scores::ActiveModel {
        id: NotSet,
        round_id: Set(dto.round_id),
        hole_number: Set(dto.hole_number),
        gross_score: Set(dto.gross_score),
        nett_score: Set(Some(dto.nett_score)),
        stableford_points: Set(Some(dto.stableford_points)),
    };
    hole_scores::Entity::insert(active)
        .on_conflict(
            OnConflict::columns([hole_scores::Column::RoundId, hole_scores::Column::HoleNumber])
                .update_columns([
                    hole_scores::Column::GrossScore,
                    hole_scores::Column::NettScore,
                    hole_scores::Column::StablefordPoints,
                ])
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;
    Ok(())
}
