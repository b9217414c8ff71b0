use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;

use crate::adapters::players_sea::{PlayerCreate, PlayerUpdate};
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::players::Player;
use crate::services::players::PlayerService;
use crate::state::app_state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct PlayerResponse {
    pub id: i64,
    pub name: String,
    pub handicap: Option<f64>,
}

impl From<Player> for PlayerResponse {
    fn from(p: Player) -> Self {
        Self {
            id: p.id,
            name: p.name,
            handicap: p.handicap,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
    #[serde(default)]
    pub handicap: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePlayerRequest {
    #[serde(default)]
    pub name: Option<String>,
    // null clears the handicap; absent leaves it alone
    #[serde(default, with = "double_option")]
    pub handicap: Option<Option<f64>>,
}

async fn list_players(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let players = PlayerService::new().list(db).await?;
    Ok(HttpResponse::Ok().json(
        players
            .into_iter()
            .map(PlayerResponse::from)
            .collect::<Vec<_>>(),
    ))
}

async fn get_player(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let player = PlayerService::new().get(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PlayerResponse::from(player)))
}

async fn create_player(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreatePlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let dto = PlayerCreate {
        name: body.name,
        handicap: body.handicap,
    };
    let player = with_txn(&app_state, move |txn| {
        Box::pin(async move { PlayerService::new().create(txn, dto).await })
    })
    .await?;
    Ok(HttpResponse::Created().json(PlayerResponse::from(player)))
}

async fn update_player(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: ValidatedJson<UpdatePlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    let body = body.into_inner();
    let dto = PlayerUpdate {
        name: body.name,
        handicap: body.handicap,
    };
    let player = with_txn(&app_state, move |txn| {
        Box::pin(async move { PlayerService::new().update(txn, player_id, dto).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(PlayerResponse::from(player)))
}

async fn delete_player(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    with_txn(&app_state, move |txn| {
        Box::pin(async move { PlayerService::new().delete(txn, player_id).await })
    })
    .await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_players))
            .route(web::post().to(create_player)),
    )
    .service(
        web::resource("/{player_id}")
            .route(web::get().to(get_player))
            .route(web::put().to(update_player))
            .route(web::delete().to(delete_player)),
    );
}
