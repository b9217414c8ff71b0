use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;
use time::Date;

use super::courses::CourseResponse;
use super::players::PlayerResponse;
use super::rounds::RoundResponse;
use super::{iso_date, parse_date};
use crate::adapters::tournaments_sea::{TournamentCreate, TournamentUpdate};
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::leaderboard::Standing;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::memberships::CourseSlot;
use crate::services::leaderboard::LeaderboardService;
use crate::services::round_lifecycle::{EndRoundOutcome, HandicapChange, RoundLifecycleService};
use crate::services::rounds::{RoundService, RoundSummaryRow};
use crate::services::tournaments::{ScheduledCourse, TournamentDetail, TournamentService};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct ScheduledCourseResponse {
    #[serde(flatten)]
    pub course: CourseResponse,
    pub sequence_number: i32,
}

impl From<ScheduledCourse> for ScheduledCourseResponse {
    fn from(s: ScheduledCourse) -> Self {
        Self {
            course: CourseResponse::from(s.course),
            sequence_number: s.sequence_number,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TournamentResponse {
    pub id: i64,
    pub name: String,
    #[serde(with = "iso_date::option")]
    pub date: Option<Date>,
    pub location: Option<String>,
    pub players: Vec<PlayerResponse>,
    pub courses: Vec<ScheduledCourseResponse>,
}

impl From<TournamentDetail> for TournamentResponse {
    fn from(d: TournamentDetail) -> Self {
        Self {
            id: d.tournament.id,
            name: d.tournament.name,
            date: d.tournament.date,
            location: d.tournament.location,
            players: d.players.into_iter().map(PlayerResponse::from).collect(),
            courses: d
                .courses
                .into_iter()
                .map(ScheduledCourseResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoundSummaryResponse {
    #[serde(flatten)]
    pub round: RoundResponse,
    pub player_name: String,
    pub course_name: String,
}

impl From<RoundSummaryRow> for RoundSummaryResponse {
    fn from(row: RoundSummaryRow) -> Self {
        Self {
            round: RoundResponse::from(row.round),
            player_name: row.player_name,
            course_name: row.course_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StandingResponse {
    pub position: u32,
    pub player_id: i64,
    pub player_name: String,
    pub rounds_played: u32,
    pub gross: i32,
    pub nett: i32,
    pub stableford: i32,
}

impl From<Standing> for StandingResponse {
    fn from(s: Standing) -> Self {
        Self {
            position: s.position,
            player_id: s.totals.player_id,
            player_name: s.totals.player_name,
            rounds_played: s.totals.rounds_played,
            gross: s.totals.gross,
            nett: s.totals.nett,
            stableford: s.totals.stableford,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HandicapChangeResponse {
    pub player_id: i64,
    pub previous: f64,
    pub new: f64,
}

impl From<HandicapChange> for HandicapChangeResponse {
    fn from(c: HandicapChange) -> Self {
        Self {
            player_id: c.player_id,
            previous: c.previous,
            new: c.new,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EndRoundResponse {
    pub message: String,
    pub finalized: usize,
    pub handicap_changes: Vec<HandicapChangeResponse>,
}

#[derive(Debug, Serialize)]
pub struct ReopenAllResponse {
    pub message: String,
    pub reopened: usize,
}

#[derive(Debug, Deserialize)]
pub struct CreateTournamentRequest {
    pub name: String,
    #[serde(default, with = "iso_date::option")]
    pub date: Option<Date>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTournamentRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "double_option")]
    pub date: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub location: Option<Option<String>>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerIdsRequest {
    #[serde(default)]
    pub player_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CourseRef {
    pub id: i64,
    #[serde(default)]
    pub sequence_number: i32,
}

#[derive(Debug, Deserialize)]
pub struct CoursesRequest {
    #[serde(default)]
    pub courses: Vec<CourseRef>,
}

impl CoursesRequest {
    fn slots(self) -> Vec<CourseSlot> {
        self.courses
            .into_iter()
            .map(|c| CourseSlot {
                course_id: c.id,
                sequence_number: c.sequence_number,
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct EndRoundRequest {
    pub round_number: i32,
}

#[derive(Debug, Deserialize)]
pub struct ReopenAllRequest {
    pub sequence_number: i32,
}

async fn list_tournaments(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let service = TournamentService::new();
    let mut out = Vec::new();
    for tournament in service.list(db).await? {
        out.push(TournamentResponse::from(
            service.detail(db, tournament.id).await?,
        ));
    }
    Ok(HttpResponse::Ok().json(out))
}

async fn get_tournament(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let detail = TournamentService::new()
        .detail(db, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(TournamentResponse::from(detail)))
}

async fn create_tournament(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateTournamentRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let dto = TournamentCreate {
        name: body.name,
        date: body.date,
        location: body.location,
    };
    let detail = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let service = TournamentService::new();
            let tournament = service.create(txn, dto).await?;
            service.detail(txn, tournament.id).await
        })
    })
    .await?;
    Ok(HttpResponse::Created().json(TournamentResponse::from(detail)))
}

async fn update_tournament(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: ValidatedJson<UpdateTournamentRequest>,
) -> Result<HttpResponse, AppError> {
    let tournament_id = path.into_inner();
    let body = body.into_inner();
    let date = match body.date {
        Some(Some(raw)) => Some(Some(parse_date(&raw)?)),
        Some(None) => Some(None),
        None => None,
    };
    let dto = TournamentUpdate {
        name: body.name,
        date,
        location: body.location,
    };
    let detail = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let service = TournamentService::new();
            service.update(txn, tournament_id, dto).await?;
            service.detail(txn, tournament_id).await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(TournamentResponse::from(detail)))
}

async fn delete_tournament(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let tournament_id = path.into_inner();
    with_txn(&app_state, move |txn| {
        Box::pin(async move { TournamentService::new().delete(txn, tournament_id).await })
    })
    .await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn list_tournament_players(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let players = TournamentService::new()
        .players(db, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(
        players
            .into_iter()
            .map(PlayerResponse::from)
            .collect::<Vec<_>>(),
    ))
}

async fn add_tournament_players(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: ValidatedJson<PlayerIdsRequest>,
) -> Result<HttpResponse, AppError> {
    let tournament_id = path.into_inner();
    let ids = body.into_inner().player_ids;
    let detail = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            TournamentService::new()
                .add_players(txn, tournament_id, &ids)
                .await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(TournamentResponse::from(detail)))
}

async fn remove_tournament_players(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: ValidatedJson<PlayerIdsRequest>,
) -> Result<HttpResponse, AppError> {
    let tournament_id = path.into_inner();
    let ids = body.into_inner().player_ids;
    let detail = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            TournamentService::new()
                .remove_players(txn, tournament_id, &ids)
                .await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(TournamentResponse::from(detail)))
}

async fn list_tournament_courses(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let courses = TournamentService::new()
        .courses(db, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(
        courses
            .into_iter()
            .map(ScheduledCourseResponse::from)
            .collect::<Vec<_>>(),
    ))
}

async fn add_tournament_courses(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: ValidatedJson<CoursesRequest>,
) -> Result<HttpResponse, AppError> {
    let tournament_id = path.into_inner();
    let slots = body.into_inner().slots();
    let detail = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            TournamentService::new()
                .add_courses(txn, tournament_id, &slots)
                .await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(TournamentResponse::from(detail)))
}

async fn remove_tournament_courses(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: ValidatedJson<CoursesRequest>,
) -> Result<HttpResponse, AppError> {
    let tournament_id = path.into_inner();
    let slots = body.into_inner().slots();
    let detail = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            TournamentService::new()
                .remove_courses(txn, tournament_id, &slots)
                .await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(TournamentResponse::from(detail)))
}

async fn rounds_summary(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let rows = RoundService::new()
        .rounds_summary(db, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(
        rows.into_iter()
            .map(RoundSummaryResponse::from)
            .collect::<Vec<_>>(),
    ))
}

async fn leaderboard(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let standings = LeaderboardService::new()
        .standings(db, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(
        standings
            .into_iter()
            .map(StandingResponse::from)
            .collect::<Vec<_>>(),
    ))
}

async fn end_round(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: ValidatedJson<EndRoundRequest>,
) -> Result<HttpResponse, AppError> {
    let tournament_id = path.into_inner();
    let round_number = body.round_number;
    let EndRoundOutcome {
        finalized,
        handicap_changes,
    } = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            RoundLifecycleService::new()
                .end_round(txn, tournament_id, round_number)
                .await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(EndRoundResponse {
        message: format!("Round {round_number} finalized and handicaps updated successfully!"),
        finalized,
        handicap_changes: handicap_changes
            .into_iter()
            .map(HandicapChangeResponse::from)
            .collect(),
    }))
}

async fn reopen_all(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: ValidatedJson<ReopenAllRequest>,
) -> Result<HttpResponse, AppError> {
    let tournament_id = path.into_inner();
    let sequence_number = body.sequence_number;
    let reopened = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            RoundLifecycleService::new()
                .reopen_all(txn, tournament_id, sequence_number)
                .await
        })
    })
    .await?;
    let message = if reopened == 0 {
        "No finalized rounds found to re-open for this tournament and sequence.".to_string()
    } else {
        format!(
            "All rounds for tournament {tournament_id}, sequence {sequence_number} re-opened successfully!"
        )
    };
    Ok(HttpResponse::Ok().json(ReopenAllResponse { message, reopened }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_tournaments))
            .route(web::post().to(create_tournament)),
    )
    .service(
        web::resource("/{tournament_id}")
            .route(web::get().to(get_tournament))
            .route(web::put().to(update_tournament))
            .route(web::delete().to(delete_tournament)),
    )
    .service(
        web::resource("/{tournament_id}/players")
            .route(web::get().to(list_tournament_players))
            .route(web::post().to(add_tournament_players))
            .route(web::delete().to(remove_tournament_players)),
    )
    .service(
        web::resource("/{tournament_id}/courses")
            .route(web::get().to(list_tournament_courses))
            .route(web::post().to(add_tournament_courses))
            .route(web::delete().to(remove_tournament_courses)),
    )
    .service(web::resource("/{tournament_id}/rounds_summary").route(web::get().to(rounds_summary)))
    .service(web::resource("/{tournament_id}/leaderboard").route(web::get().to(leaderboard)))
    .service(web::resource("/{tournament_id}/rounds/end").route(web::post().to(end_round)))
    .service(web::resource("/{tournament_id}/rounds/reopen_all").route(web::post().to(reopen_all)));
}
