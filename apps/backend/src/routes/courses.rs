use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::HoleInfo;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::courses::{Course, CoursePatch};
use crate::services::courses::{CourseInput, CourseService};
use crate::state::app_state::AppState;

/// Course as clients see it; unconfigured hole arrays are `[]`.
#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    pub country: Option<String>,
    pub slope_rating: Option<f64>,
    pub hole_pars: Vec<i32>,
    pub hole_stroke_indices: Vec<i32>,
}

impl From<Course> for CourseResponse {
    fn from(c: Course) -> Self {
        Self {
            hole_pars: c.layout.pars().to_vec(),
            hole_stroke_indices: c.layout.stroke_indices().to_vec(),
            id: c.id,
            name: c.name,
            country: c.country,
            slope_rating: c.slope_rating,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HoleResponse {
    pub hole_number: i32,
    pub par: Option<i32>,
    #[serde(rename = "strokeIndex")]
    pub stroke_index: Option<i32>,
}

impl From<HoleInfo> for HoleResponse {
    fn from(h: HoleInfo) -> Self {
        Self {
            hole_number: h.hole_number,
            par: h.par,
            stroke_index: h.stroke_index,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub slope_rating: Option<f64>,
    #[serde(default)]
    pub hole_pars: Vec<i32>,
    #[serde(default)]
    pub hole_stroke_indices: Vec<i32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "double_option")]
    pub country: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub slope_rating: Option<Option<f64>>,
    #[serde(default)]
    pub hole_pars: Option<Vec<i32>>,
    #[serde(default)]
    pub hole_stroke_indices: Option<Vec<i32>>,
}

impl From<UpdateCourseRequest> for CoursePatch {
    fn from(req: UpdateCourseRequest) -> Self {
        Self {
            name: req.name,
            country: req.country,
            slope_rating: req.slope_rating,
            pars: req.hole_pars,
            stroke_indices: req.hole_stroke_indices,
        }
    }
}

async fn list_courses(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let courses = CourseService::new().list(db).await?;
    Ok(HttpResponse::Ok().json(
        courses
            .into_iter()
            .map(CourseResponse::from)
            .collect::<Vec<_>>(),
    ))
}

async fn get_course(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let course = CourseService::new().get(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CourseResponse::from(course)))
}

async fn course_holes(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let holes = CourseService::new().holes(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(holes.into_iter().map(HoleResponse::from).collect::<Vec<_>>()))
}

async fn create_course(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateCourseRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let input = CourseInput {
        name: body.name,
        country: body.country,
        slope_rating: body.slope_rating,
        hole_pars: body.hole_pars,
        hole_stroke_indices: body.hole_stroke_indices,
    };
    let course = with_txn(&app_state, move |txn| {
        Box::pin(async move { CourseService::new().create(txn, input).await })
    })
    .await?;
    Ok(HttpResponse::Created().json(CourseResponse::from(course)))
}

async fn update_course(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: ValidatedJson<UpdateCourseRequest>,
) -> Result<HttpResponse, AppError> {
    let course_id = path.into_inner();
    let patch = CoursePatch::from(body.into_inner());
    let course = with_txn(&app_state, move |txn| {
        Box::pin(async move { CourseService::new().update(txn, course_id, patch).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(CourseResponse::from(course)))
}

async fn delete_course(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let course_id = path.into_inner();
    with_txn(&app_state, move |txn| {
        Box::pin(async move { CourseService::new().delete(txn, course_id).await })
    })
    .await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_courses))
            .route(web::post().to(create_course)),
    )
    .service(
        web::resource("/{course_id}")
            .route(web::get().to(get_course))
            .route(web::put().to(update_course))
            .route(web::delete().to(delete_course)),
    )
    .service(web::resource("/{course_id}/holes").route(web::get().to(course_holes)));
}
