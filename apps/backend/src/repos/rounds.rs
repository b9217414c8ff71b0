//! Round repository functions.

use sea_orm::ConnectionTrait;
use time::{Date, OffsetDateTime};

use crate::adapters::rounds_sea as rounds_adapter;
pub use crate::adapters::rounds_sea::{RoundCreate, RoundFilter};
use crate::domain::RoundSummary;
use crate::entities::rounds;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Round domain model
///
/// Summary totals stay `None` until a full card has been recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub id: i64,
    pub tournament_id: i64,
    pub player_id: i64,
    pub course_id: i64,
    pub round_number: i32,
    pub date_played: Date,
    pub player_handicap_index: Option<f64>,
    pub player_playing_handicap: Option<i32>,
    pub gross_front9: Option<i32>,
    pub gross_back9: Option<i32>,
    pub gross_total: Option<i32>,
    pub nett_front9: Option<i32>,
    pub nett_back9: Option<i32>,
    pub nett_total: Option<i32>,
    pub stableford_front9: Option<i32>,
    pub stableford_back9: Option<i32>,
    pub stableford_total: Option<i32>,
    pub is_finalized: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Round {
    pub fn has_scores(&self) -> bool {
        self.stableford_total.is_some()
    }
}

impl From<rounds::Model> for Round {
    fn from(model: rounds::Model) -> Self {
        Self {
            id: model.id,
            tournament_id: model.tournament_id,
            player_id: model.player_id,
            course_id: model.course_id,
            round_number: model.round_number,
            date_played: model.date_played,
            player_handicap_index: model.player_handicap_index,
            player_playing_handicap: model.player_playing_handicap,
            gross_front9: model.gross_front9,
            gross_back9: model.gross_back9,
            gross_total: model.gross_total,
            nett_front9: model.nett_front9,
            nett_back9: model.nett_back9,
            nett_total: model.nett_total,
            stableford_front9: model.stableford_front9,
            stableford_back9: model.stableford_back9,
            stableford_total: model.stableford_total,
            is_finalized: model.is_finalized,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<&RoundSummary> for rounds_adapter::RoundTotals {
    fn from(s: &RoundSummary) -> Self {
        Self {
            gross_front9: s.gross.front9,
            gross_back9: s.gross.back9,
            gross_total: s.gross.total,
            nett_front9: s.nett.front9,
            nett_back9: s.nett.back9,
            nett_total: s.nett.total,
            stableford_front9: s.stableford.front9,
            stableford_back9: s.stableford.back9,
            stableford_total: s.stableford.total,
        }
    }
}

fn not_found(round_id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Round, format!("Round {round_id} not found"))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Option<Round>, DomainError> {
    let round = rounds_adapter::find_by_id(conn, round_id).await?;
    Ok(round.map(Round::from))
}

pub async fn require_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Round, DomainError> {
    find_by_id(conn, round_id)
        .await?
        .ok_or_else(|| not_found(round_id))
}

pub async fn create_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoundCreate,
) -> Result<Round, DomainError> {
    let round = rounds_adapter::create_round(conn, dto).await?;
    Ok(Round::from(round))
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: RoundFilter,
) -> Result<Vec<Round>, DomainError> {
    let rounds = rounds_adapter::list_filtered(conn, filter).await?;
    Ok(rounds.into_iter().map(Round::from).collect())
}

pub async fn find_by_tournament_and_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    round_number: i32,
) -> Result<Vec<Round>, DomainError> {
    let rounds =
        rounds_adapter::find_by_tournament_and_number(conn, tournament_id, round_number).await?;
    Ok(rounds.into_iter().map(Round::from).collect())
}

pub async fn save_summary<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    summary: &RoundSummary,
) -> Result<Round, DomainError> {
    let round = rounds_adapter::update_totals(conn, round_id, summary.into()).await?;
    Ok(Round::from(round))
}

/// Guarded open → finalized transition; a lost race surfaces as
/// `Conflict(RoundAlreadyFinalized)`.
pub async fn finalize_open<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<(), DomainError> {
    rounds_adapter::finalize_open(conn, round_id).await?;
    Ok(())
}

pub async fn reopen<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<(), DomainError> {
    match rounds_adapter::set_finalized(conn, round_id, false).await? {
        0 => Err(not_found(round_id)),
        _ => Ok(()),
    }
}
