//! Round lifecycle: open → finalized → open.
//!
//! Initiation freezes each player's handicap snapshot; finalization applies
//! the adjustment table to the live handicap; `reopen_all` reverts it.

use sea_orm::DatabaseTransaction;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::domain::{adjusted_index, playing_handicap};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::rounds::{self, Round, RoundCreate};
use crate::repos::{adjustments, courses, memberships, players, tournaments};

/// Request to start one stage of a tournament.
#[derive(Debug, Clone)]
pub struct InitiateRound {
    pub tournament_id: i64,
    pub course_id: i64,
    pub sequence_number: i32,
    /// Entries without an id are skipped.
    pub player_ids: Vec<Option<i64>>,
}

/// One live handicap change made by `end_round`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandicapChange {
    pub player_id: i64,
    pub previous: f64,
    pub new: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EndRoundOutcome {
    /// Rounds flipped from open to finalized by this call.
    pub finalized: usize,
    pub handicap_changes: Vec<HandicapChange>,
}

#[derive(Debug, Default)]
pub struct RoundLifecycleService;

impl RoundLifecycleService {
    pub fn new() -> Self {
        Self
    }

    /// Create one round per known player for `(tournament, sequence_number)`.
    ///
    /// The handicap index comes from the player row, and the playing handicap
    /// is derived from it with the course slope.
    pub async fn initiate(
        &self,
        txn: &DatabaseTransaction,
        req: InitiateRound,
    ) -> Result<Vec<Round>, AppError> {
        if req.player_ids.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::MissingField,
                "At least one player is required to initiate a round",
            )
            .into());
        }

        tournaments::require_tournament(txn, req.tournament_id).await?;
        let course = courses::require_course(txn, req.course_id).await?;
        let slope = course.slope_rating.ok_or_else(|| {
            DomainError::validation(
                ValidationKind::CourseNotReady,
                format!("Course {} has no slope rating", course.id),
            )
        })?;

        let today = OffsetDateTime::now_utc().date();
        let mut created = Vec::with_capacity(req.player_ids.len());

        for player_id in req.player_ids.into_iter().flatten() {
            let Some(player) = players::find_by_id(txn, player_id).await? else {
                debug!(player_id, "Skipping unknown player");
                continue;
            };

            let round = rounds::create_round(
                txn,
                RoundCreate {
                    tournament_id: req.tournament_id,
                    player_id: player.id,
                    course_id: course.id,
                    round_number: req.sequence_number,
                    date_played: today,
                    player_handicap_index: player.handicap,
                    player_playing_handicap: playing_handicap(player.handicap, slope),
                },
            )
            .await?;
            created.push(round);
        }

        info!(
            tournament_id = req.tournament_id,
            course_id = course.id,
            round_number = req.sequence_number,
            created = created.len(),
            "Rounds initiated"
        );
        Ok(created)
    }

    /// Finalize every round of `(tournament, round_number)` and apply
    /// handicap adjustments. All or nothing.
    pub async fn end_round(
        &self,
        txn: &DatabaseTransaction,
        tournament_id: i64,
        round_number: i32,
    ) -> Result<EndRoundOutcome, AppError> {
        let batch = rounds::find_by_tournament_and_number(txn, tournament_id, round_number).await?;
        if batch.is_empty() {
            return Err(DomainError::not_found(
                NotFoundKind::Round,
                format!("No rounds for tournament {tournament_id} round {round_number}"),
            )
            .into());
        }

        for round in &batch {
            if !round.has_scores() {
                let who = match players::find_by_id(txn, round.player_id).await? {
                    Some(p) => p.name,
                    None => format!("player {}", round.player_id),
                };
                return Err(DomainError::validation(
                    ValidationKind::IncompleteScores,
                    format!("Scores not submitted for {who} in round {round_number}"),
                )
                .into());
            }
        }

        // A player may hold more than one round for the same stage; only the
        // first open one counts towards the adjustment.
        let members = memberships::player_ids(txn, tournament_id).await?;

        let mut handicap_changes = Vec::new();
        for player_id in members {
            let Some(round) = batch
                .iter()
                .find(|r| r.player_id == player_id && !r.is_finalized)
            else {
                continue;
            };
            let Some(stableford) = round.stableford_total else {
                continue;
            };
            let Some(adjustment) = adjustments::find_by_score(txn, stableford).await? else {
                debug!(player_id = round.player_id, stableford, "No adjustment for score");
                continue;
            };
            let Some(player) = players::find_by_id(txn, round.player_id).await? else {
                continue;
            };
            let Some(current) = player.handicap else {
                continue;
            };

            let new = adjusted_index(current, adjustment.adjustment);
            players::set_handicap(txn, player.id, Some(new)).await?;
            handicap_changes.push(HandicapChange {
                player_id: player.id,
                previous: current,
                new,
            });
        }

        let mut finalized = 0;
        for round in batch.iter().filter(|r| !r.is_finalized) {
            rounds::finalize_open(txn, round.id).await?;
            finalized += 1;
        }

        info!(
            tournament_id,
            round_number,
            finalized,
            handicaps_changed = handicap_changes.len(),
            "Round finalized"
        );
        Ok(EndRoundOutcome {
            finalized,
            handicap_changes,
        })
    }

    /// Unlock one round for score edits. The live handicap is not reverted.
    pub async fn reopen(&self, txn: &DatabaseTransaction, round_id: i64) -> Result<(), AppError> {
        let round = rounds::require_round(txn, round_id).await?;
        if !round.is_finalized {
            return Err(DomainError::validation(
                ValidationKind::NotFinalized,
                format!("Round {round_id} is not finalized"),
            )
            .into());
        }
        rounds::reopen(txn, round_id).await?;
        info!(round_id, "Round reopened");
        Ok(())
    }

    /// Unlock every finalized round of `(tournament, sequence_number)` and
    /// restore each player's handicap from the round snapshot.
    ///
    /// Returns the number of rounds reopened; zero is not an error.
    pub async fn reopen_all(
        &self,
        txn: &DatabaseTransaction,
        tournament_id: i64,
        sequence_number: i32,
    ) -> Result<usize, AppError> {
        let finalized: Vec<Round> =
            rounds::find_by_tournament_and_number(txn, tournament_id, sequence_number)
                .await?
                .into_iter()
                .filter(|r| r.is_finalized)
                .collect();

        for round in &finalized {
            rounds::reopen(txn, round.id).await?;
            if let Some(snapshot) = round.player_handicap_index {
                if players::find_by_id(txn, round.player_id).await?.is_some() {
                    players::set_handicap(txn, round.player_id, Some(snapshot)).await?;
                }
            }
        }

        info!(
            tournament_id,
            round_number = sequence_number,
            reopened = finalized.len(),
            "Rounds reopened"
        );
        Ok(finalized.len())
    }
}
