use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::adjustments::HandicapAdjustment;
use crate::services::adjustments::AdjustmentService;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct AdjustmentResponse {
    pub stableford_score: i32,
    pub adjustment: f64,
}

impl From<HandicapAdjustment> for AdjustmentResponse {
    fn from(a: HandicapAdjustment) -> Self {
        Self {
            stableford_score: a.stableford_score,
            adjustment: a.adjustment,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateAdjustmentRequest {
    pub stableford_score: i32,
    pub adjustment: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAdjustmentRequest {
    pub adjustment: f64,
}

async fn list_adjustments(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let rows = AdjustmentService::new().list(db).await?;
    Ok(HttpResponse::Ok().json(
        rows.into_iter()
            .map(AdjustmentResponse::from)
            .collect::<Vec<_>>(),
    ))
}

async fn create_adjustment(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateAdjustmentRequest>,
) -> Result<HttpResponse, AppError> {
    let CreateAdjustmentRequest {
        stableford_score,
        adjustment,
    } = body.into_inner();
    let row = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            AdjustmentService::new()
                .create(txn, stableford_score, adjustment)
                .await
        })
    })
    .await?;
    Ok(HttpResponse::Created().json(AdjustmentResponse::from(row)))
}

async fn update_adjustment(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
    body: ValidatedJson<UpdateAdjustmentRequest>,
) -> Result<HttpResponse, AppError> {
    let stableford_score = path.into_inner();
    let adjustment = body.adjustment;
    let row = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            AdjustmentService::new()
                .update(txn, stableford_score, adjustment)
                .await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(AdjustmentResponse::from(row)))
}

async fn delete_adjustment(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let stableford_score = path.into_inner();
    with_txn(&app_state, move |txn| {
        Box::pin(async move { AdjustmentService::new().delete(txn, stableford_score).await })
    })
    .await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_adjustments))
            .route(web::post().to(create_adjustment)),
    )
    .service(
        web::resource("/{stableford_score}")
            .route(web::put().to(update_adjustment))
            .route(web::delete().to(delete_adjustment)),
    );
}
