use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::Date;

use super::iso_date;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::HoleEntry;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::repos::hole_scores::HoleScore;
use crate::repos::rounds::{Round, RoundFilter};
use crate::services::round_lifecycle::{InitiateRound, RoundLifecycleService};
use crate::services::rounds::{NewRound, RoundService, RoundWithHoles};
use crate::services::scoring::ScoringService;
use crate::state::app_state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct HoleScoreResponse {
    pub id: i64,
    pub round_id: i64,
    pub hole_number: i32,
    pub gross_score: i32,
    pub nett_score: Option<i32>,
    pub stableford_points: Option<i32>,
}

impl From<HoleScore> for HoleScoreResponse {
    fn from(h: HoleScore) -> Self {
        Self {
            id: h.id,
            round_id: h.round_id,
            hole_number: h.hole_number,
            gross_score: h.gross_score,
            nett_score: h.nett_score,
            stableford_points: h.stableford_points,
        }
    }
}

/// Round with its summary fields and recorded holes.
#[derive(Debug, Clone, Serialize)]
pub struct RoundResponse {
    pub id: i64,
    pub tournament_id: i64,
    pub player_id: i64,
    pub course_id: i64,
    pub round_number: i32,
    #[serde(with = "iso_date")]
    pub date_played: Date,
    pub gross_score_front_9: Option<i32>,
    pub nett_score_front_9: Option<i32>,
    pub stableford_front_9: Option<i32>,
    pub gross_score_back_9: Option<i32>,
    pub nett_score_back_9: Option<i32>,
    pub stableford_back_9: Option<i32>,
    pub gross_score_total: Option<i32>,
    pub nett_score_total: Option<i32>,
    pub stableford_total: Option<i32>,
    pub player_handicap_index: Option<f64>,
    pub player_playing_handicap: Option<i32>,
    pub is_finalized: bool,
    pub hole_scores: Vec<HoleScoreResponse>,
}

impl RoundResponse {
    pub fn new(round: Round, hole_scores: Vec<HoleScore>) -> Self {
        Self {
            id: round.id,
            tournament_id: round.tournament_id,
            player_id: round.player_id,
            course_id: round.course_id,
            round_number: round.round_number,
            date_played: round.date_played,
            gross_score_front_9: round.gross_front9,
            nett_score_front_9: round.nett_front9,
            stableford_front_9: round.stableford_front9,
            gross_score_back_9: round.gross_back9,
            nett_score_back_9: round.nett_back9,
            stableford_back_9: round.stableford_back9,
            gross_score_total: round.gross_total,
            nett_score_total: round.nett_total,
            stableford_total: round.stableford_total,
            player_handicap_index: round.player_handicap_index,
            player_playing_handicap: round.player_playing_handicap,
            is_finalized: round.is_finalized,
            hole_scores: hole_scores.into_iter().map(HoleScoreResponse::from).collect(),
        }
    }
}

impl From<RoundWithHoles> for RoundResponse {
    fn from(r: RoundWithHoles) -> Self {
        Self::new(r.round, r.hole_scores)
    }
}

impl From<Round> for RoundResponse {
    fn from(round: Round) -> Self {
        Self::new(round, Vec::new())
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct RoundsQuery {
    pub tournament_id: Option<i64>,
    pub player_id: Option<i64>,
    pub course_id: Option<i64>,
    pub sequence_number: Option<i32>,
    /// Comma separated, e.g. `1,2,5`.
    pub player_ids: Option<String>,
}

fn parse_id_list(raw: &str) -> Result<Vec<i64>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>().map_err(|_| {
                AppError::bad_request(ErrorCode::BadRequest, format!("Invalid player id '{s}'"))
            })
        })
        .collect()
}

impl RoundsQuery {
    fn into_filter(self) -> Result<RoundFilter, AppError> {
        let player_ids = self.player_ids.as_deref().map(parse_id_list).transpose()?;
        Ok(RoundFilter {
            tournament_id: self.tournament_id,
            player_id: self.player_id,
            course_id: self.course_id,
            round_number: self.sequence_number,
            player_ids,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateRoundRequest {
    pub tournament_id: i64,
    pub player_id: i64,
    pub course_id: i64,
    pub round_number: i32,
    #[serde(with = "iso_date")]
    pub date_played: Date,
}

#[derive(Debug, Deserialize)]
pub struct HoleScoreInput {
    // 0 when absent; rejected as an invalid hole number
    #[serde(default)]
    pub hole_number: i32,
    #[serde(default)]
    pub gross_score: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct RecordScoresRequest {
    #[serde(default)]
    pub hole_scores: Vec<HoleScoreInput>,
}

#[derive(Debug, Deserialize)]
pub struct InitiatePlayer {
    #[serde(default)]
    pub player_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct InitiateRoundRequest {
    pub tournament_id: i64,
    pub course_id: i64,
    pub sequence_number: i32,
    #[serde(default, alias = "players_data")]
    pub players: Vec<InitiatePlayer>,
}

#[derive(Debug, Serialize)]
pub struct InitiateRoundResponse {
    pub message: String,
    pub rounds: Vec<RoundResponse>,
}

async fn list_rounds(
    app_state: web::Data<AppState>,
    query: web::Query<RoundsQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner().into_filter()?;
    let db = require_db(&app_state)?;
    let rounds = RoundService::new().list(db, filter).await?;
    Ok(HttpResponse::Ok().json(rounds.into_iter().map(RoundResponse::from).collect::<Vec<_>>()))
}

async fn get_round(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let round = RoundService::new().get(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(RoundResponse::from(round)))
}

async fn create_round(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateRoundRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let new = NewRound {
        tournament_id: body.tournament_id,
        player_id: body.player_id,
        course_id: body.course_id,
        round_number: body.round_number,
        date_played: body.date_played,
    };
    let round = with_txn(&app_state, move |txn| {
        Box::pin(async move { RoundService::new().create_round(txn, new).await })
    })
    .await?;
    Ok(HttpResponse::Created().json(RoundResponse::from(round)))
}

async fn list_hole_scores(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let holes = RoundService::new().hole_scores(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(
        holes
            .into_iter()
            .map(HoleScoreResponse::from)
            .collect::<Vec<_>>(),
    ))
}

async fn record_hole_scores(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: ValidatedJson<RecordScoresRequest>,
) -> Result<HttpResponse, AppError> {
    let round_id = path.into_inner();
    let entries: Vec<HoleEntry> = body
        .into_inner()
        .hole_scores
        .into_iter()
        .map(|h| HoleEntry {
            hole_number: h.hole_number,
            gross_score: h.gross_score,
        })
        .collect();

    let round = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            ScoringService::new()
                .record_hole_scores(txn, round_id, &entries)
                .await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(RoundResponse::from(round)))
}

async fn reopen_round(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let round_id = path.into_inner();
    with_txn(&app_state, move |txn| {
        Box::pin(async move { RoundLifecycleService::new().reopen(txn, round_id).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: format!("Round {round_id} re-opened successfully!"),
    }))
}

async fn initiate_round(
    app_state: web::Data<AppState>,
    body: ValidatedJson<InitiateRoundRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let req = InitiateRound {
        tournament_id: body.tournament_id,
        course_id: body.course_id,
        sequence_number: body.sequence_number,
        player_ids: body.players.into_iter().map(|p| p.player_id).collect(),
    };
    let rounds = with_txn(&app_state, move |txn| {
        Box::pin(async move { RoundLifecycleService::new().initiate(txn, req).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(InitiateRoundResponse {
        message: "Rounds initiated successfully!".to_string(),
        rounds: rounds.into_iter().map(RoundResponse::from).collect(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/initiate").route(web::post().to(initiate_round)))
        .service(
            web::resource("")
                .route(web::get().to(list_rounds))
                .route(web::post().to(create_round)),
        )
        .service(web::resource("/{round_id}").route(web::get().to(get_round)))
        .service(
            web::resource("/{round_id}/scores")
                .route(web::get().to(list_hole_scores))
                .route(web::post().to(record_hole_scores)),
        )
        .service(web::resource("/{round_id}/reopen").route(web::post().to(reopen_round)));
}
