//! Round creation and read models.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::Date;
use tracing::info;

use crate::error::AppError;
use crate::repos::courses;
use crate::repos::hole_scores::{self, HoleScore};
use crate::repos::players;
use crate::repos::rounds::{self, Round, RoundCreate, RoundFilter};
use crate::repos::tournaments;

const UNKNOWN_PLAYER: &str = "Unknown Player";
const UNKNOWN_COURSE: &str = "Unknown Course";

/// A round with its recorded holes, hole 1 first.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundWithHoles {
    pub round: Round,
    pub hole_scores: Vec<HoleScore>,
}

/// Row of the tournament round summary.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSummaryRow {
    pub round: RoundWithHoles,
    pub player_name: String,
    pub course_name: String,
}

/// Fields for a round created outside `initiate`; no handicap snapshot.
#[derive(Debug, Clone)]
pub struct NewRound {
    pub tournament_id: i64,
    pub player_id: i64,
    pub course_id: i64,
    pub round_number: i32,
    pub date_played: Date,
}

async fn attach_holes<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    rounds: Vec<Round>,
) -> Result<Vec<RoundWithHoles>, AppError> {
    let ids: Vec<i64> = rounds.iter().map(|r| r.id).collect();
    let mut by_round: HashMap<i64, Vec<HoleScore>> = HashMap::new();
    for hole in hole_scores::list_for_rounds(conn, &ids).await? {
        by_round.entry(hole.round_id).or_default().push(hole);
    }
    Ok(rounds
        .into_iter()
        .map(|round| RoundWithHoles {
            hole_scores: by_round.remove(&round.id).unwrap_or_default(),
            round,
        })
        .collect())
}

#[derive(Debug, Default)]
pub struct RoundService;

impl RoundService {
    pub fn new() -> Self {
        Self
    }

    pub async fn create_round(
        &self,
        txn: &DatabaseTransaction,
        new: NewRound,
    ) -> Result<Round, AppError> {
        tournaments::require_tournament(txn, new.tournament_id).await?;
        players::require_player(txn, new.player_id).await?;
        courses::require_course(txn, new.course_id).await?;

        let round = rounds::create_round(
            txn,
            RoundCreate {
                tournament_id: new.tournament_id,
                player_id: new.player_id,
                course_id: new.course_id,
                round_number: new.round_number,
                date_played: new.date_played,
                player_handicap_index: None,
                player_playing_handicap: None,
            },
        )
        .await?;
        info!(
            round_id = round.id,
            tournament_id = round.tournament_id,
            player_id = round.player_id,
            "Round created"
        );
        Ok(round)
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        filter: RoundFilter,
    ) -> Result<Vec<RoundWithHoles>, AppError> {
        let rounds = rounds::list(conn, filter).await?;
        attach_holes(conn, rounds).await
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        round_id: i64,
    ) -> Result<RoundWithHoles, AppError> {
        let round = rounds::require_round(conn, round_id).await?;
        let hole_scores = hole_scores::list_for_round(conn, round_id).await?;
        Ok(RoundWithHoles { round, hole_scores })
    }

    /// Recorded holes; empty for an unknown or unscored round.
    pub async fn hole_scores<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        round_id: i64,
    ) -> Result<Vec<HoleScore>, AppError> {
        Ok(hole_scores::list_for_round(conn, round_id).await?)
    }

    /// Every round of a tournament with player and course names.
    pub async fn rounds_summary<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tournament_id: i64,
    ) -> Result<Vec<RoundSummaryRow>, AppError> {
        let rounds = rounds::list(
            conn,
            RoundFilter {
                tournament_id: Some(tournament_id),
                ..RoundFilter::default()
            },
        )
        .await?;

        let mut player_ids: Vec<i64> = rounds.iter().map(|r| r.player_id).collect();
        player_ids.sort_unstable();
        player_ids.dedup();
        let mut course_ids: Vec<i64> = rounds.iter().map(|r| r.course_id).collect();
        course_ids.sort_unstable();
        course_ids.dedup();

        let player_names: HashMap<i64, String> = players::find_by_ids(conn, &player_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();
        let course_names: HashMap<i64, String> = courses::find_by_ids(conn, &course_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        Ok(attach_holes(conn, rounds)
            .await?
            .into_iter()
            .map(|round| RoundSummaryRow {
                player_name: player_names
                    .get(&round.round.player_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_PLAYER.to_string()),
                course_name: course_names
                    .get(&round.round.course_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_COURSE.to_string()),
                round,
            })
            .collect())
    }
}
