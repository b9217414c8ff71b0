//! Score submission: runs the card through the domain scorer and persists
//! holes and round totals.

use sea_orm::DatabaseTransaction;
use tracing::{debug, info};

use super::rounds::RoundWithHoles;
use crate::domain::{score_round, HoleEntry};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::{courses, hole_scores, rounds};

#[derive(Debug, Default)]
pub struct ScoringService;

impl ScoringService {
    pub fn new() -> Self {
        Self
    }

    /// Record a full 18-hole card for an open round.
    ///
    /// Every entry is validated and scored before the first write, so a bad
    /// card leaves the round untouched. Resubmitting the same card yields the
    /// same rows and totals. The player's handicap is not touched.
    pub async fn record_hole_scores(
        &self,
        txn: &DatabaseTransaction,
        round_id: i64,
        entries: &[HoleEntry],
    ) -> Result<RoundWithHoles, AppError> {
        let round = rounds::require_round(txn, round_id).await?;
        if round.is_finalized {
            return Err(DomainError::conflict(
                ConflictKind::RoundFinalized,
                format!("Round {round_id} is finalized; reopen it to edit scores"),
            )
            .into());
        }

        let course = courses::require_course(txn, round.course_id).await?;
        let card = score_round(&course.layout, round.player_playing_handicap, entries)?;

        for hole in &card.holes {
            debug!(
                round_id,
                hole_number = hole.hole_number,
                gross = hole.gross,
                nett = hole.nett,
                stableford = hole.stableford,
                "Hole scored"
            );
        }

        hole_scores::save_scorecard(txn, round_id, &card).await?;
        let round = rounds::save_summary(txn, round_id, &card.summary).await?;
        let hole_scores = hole_scores::list_for_round(txn, round_id).await?;

        info!(
            round_id,
            player_id = round.player_id,
            gross = card.summary.gross.total,
            nett = card.summary.nett.total,
            stableford = card.summary.stableford.total,
            "Scores recorded"
        );
        Ok(RoundWithHoles { round, hole_scores })
    }
}
