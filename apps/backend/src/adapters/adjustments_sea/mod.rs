//! SeaORM adapter for the handicap adjustment lookup table.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};

use crate::entities::handicap_adjustments;

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<handicap_adjustments::Model>, sea_orm::DbErr> {
    handicap_adjustments::Entity::find()
        .order_by_asc(handicap_adjustments::Column::StablefordScore)
        .all(conn)
        .await
}

pub async fn find_by_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stableford_score: i32,
) -> Result<Option<handicap_adjustments::Model>, sea_orm::DbErr> {
    handicap_adjustments::Entity::find_by_id(stableford_score)
        .one(conn)
        .await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stableford_score: i32,
    adjustment: f64,
) -> Result<handicap_adjustments::Model, sea_orm::DbErr> {
    let active = handicap_adjustments::ActiveModel {
        stableford_score: Set(stableford_score),
        adjustment: Set(adjustment),
    };
    active.insert(conn).await
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stableford_score: i32,
    adjustment: f64,
) -> Result<handicap_adjustments::Model, sea_orm::DbErr> {
    let existing = find_by_score(conn, stableford_score)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Adjustment not found".to_string()))?;
    let mut active: handicap_adjustments::ActiveModel = existing.into();
    active.adjustment = Set(adjustment);
    active.update(conn).await
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stableford_score: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = handicap_adjustments::Entity::delete_by_id(stableford_score)
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
