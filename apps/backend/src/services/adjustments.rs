//! Handicap adjustment table maintenance.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::info;

use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::adjustments::{self, HandicapAdjustment};

fn check_finite(adjustment: f64) -> Result<(), DomainError> {
    if adjustment.is_finite() {
        Ok(())
    } else {
        Err(DomainError::validation_other(
            "Adjustment must be a finite number",
        ))
    }
}

#[derive(Debug, Default)]
pub struct AdjustmentService;

impl AdjustmentService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<HandicapAdjustment>, AppError> {
        Ok(adjustments::list(conn).await?)
    }

    /// Conflict when the Stableford score already has an entry.
    pub async fn create(
        &self,
        txn: &DatabaseTransaction,
        stableford_score: i32,
        adjustment: f64,
    ) -> Result<HandicapAdjustment, AppError> {
        check_finite(adjustment)?;
        let row = adjustments::create(txn, stableford_score, adjustment).await?;
        info!(stableford_score, adjustment, "Handicap adjustment added");
        Ok(row)
    }

    pub async fn update(
        &self,
        txn: &DatabaseTransaction,
        stableford_score: i32,
        adjustment: f64,
    ) -> Result<HandicapAdjustment, AppError> {
        check_finite(adjustment)?;
        Ok(adjustments::update(txn, stableford_score, adjustment).await?)
    }

    pub async fn delete(
        &self,
        txn: &DatabaseTransaction,
        stableford_score: i32,
    ) -> Result<(), AppError> {
        adjustments::delete(txn, stableford_score).await?;
        Ok(())
    }
}
