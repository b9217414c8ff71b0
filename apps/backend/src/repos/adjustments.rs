//! Handicap adjustment lookup repository.

use sea_orm::ConnectionTrait;

use crate::adapters::adjustments_sea as adjustments_adapter;
use crate::entities::handicap_adjustments;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandicapAdjustment {
    pub stableford_score: i32,
    pub adjustment: f64,
}

impl From<handicap_adjustments::Model> for HandicapAdjustment {
    fn from(model: handicap_adjustments::Model) -> Self {
        Self {
            stableford_score: model.stableford_score,
            adjustment: model.adjustment,
        }
    }
}

fn not_found(stableford_score: i32) -> DomainError {
    DomainError::not_found(
        NotFoundKind::Adjustment,
        format!("No adjustment for Stableford score {stableford_score}"),
    )
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<HandicapAdjustment>, DomainError> {
    let rows = adjustments_adapter::list_all(conn).await?;
    Ok(rows.into_iter().map(HandicapAdjustment::from).collect())
}

pub async fn find_by_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stableford_score: i32,
) -> Result<Option<HandicapAdjustment>, DomainError> {
    let row = adjustments_adapter::find_by_score(conn, stableford_score).await?;
    Ok(row.map(HandicapAdjustment::from))
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stableford_score: i32,
    adjustment: f64,
) -> Result<HandicapAdjustment, DomainError> {
    if find_by_score(conn, stableford_score).await?.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::AdjustmentExists,
            format!("Adjustment for Stableford score {stableford_score} already exists"),
        ));
    }
    let row = adjustments_adapter::create(conn, stableford_score, adjustment).await?;
    Ok(HandicapAdjustment::from(row))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stableford_score: i32,
    adjustment: f64,
) -> Result<HandicapAdjustment, DomainError> {
    if find_by_score(conn, stableford_score).await?.is_none() {
        return Err(not_found(stableford_score));
    }
    let row = adjustments_adapter::update(conn, stableford_score, adjustment).await?;
    Ok(HandicapAdjustment::from(row))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stableford_score: i32,
) -> Result<(), DomainError> {
    match adjustments_adapter::delete(conn, stableford_score).await? {
        0 => Err(not_found(stableford_score)),
        _ => Ok(()),
    }
}
