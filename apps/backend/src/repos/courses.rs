//! Course repository functions. Owns the JSON encoding of the per-hole arrays.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::courses_sea as courses_adapter;
use crate::domain::CourseLayout;
use crate::entities::courses;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

/// Course domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub country: Option<String>,
    pub slope_rating: Option<f64>,
    pub layout: CourseLayout,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Fields for a new course; the layout is already validated.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub country: Option<String>,
    pub slope_rating: Option<f64>,
    pub layout: CourseLayout,
}

/// Partial course update; the layout replaces both arrays when present.
#[derive(Debug, Clone, Default)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub country: Option<Option<String>>,
    pub slope_rating: Option<Option<f64>>,
    pub pars: Option<Vec<i32>>,
    pub stroke_indices: Option<Vec<i32>>,
}

fn decode_holes(raw: &str, column: &str, course_id: i64) -> Result<Vec<i32>, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    serde_json::from_str(trimmed).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("Course {course_id} has unreadable {column}: {e}"),
        )
    })
}

pub(crate) fn encode_holes(values: &[i32]) -> Result<String, DomainError> {
    serde_json::to_string(values).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Other("Encode".into()),
            format!("Failed to encode hole array: {e}"),
        )
    })
}

impl TryFrom<courses::Model> for Course {
    type Error = DomainError;

    fn try_from(model: courses::Model) -> Result<Self, Self::Error> {
        let pars = decode_holes(&model.hole_pars, "hole_pars", model.id)?;
        let stroke_indices =
            decode_holes(&model.hole_stroke_indices, "hole_stroke_indices", model.id)?;
        Ok(Self {
            id: model.id,
            name: model.name,
            country: model.country,
            slope_rating: model.slope_rating,
            layout: CourseLayout::from_stored(pars, stroke_indices),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

fn not_found(course_id: i64) -> DomainError {
    DomainError::not_found(
        NotFoundKind::Course,
        format!("Course {course_id} not found"),
    )
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    course_id: i64,
) -> Result<Option<Course>, DomainError> {
    courses_adapter::find_by_id(conn, course_id)
        .await?
        .map(Course::try_from)
        .transpose()
}

pub async fn require_course<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    course_id: i64,
) -> Result<Course, DomainError> {
    find_by_id(conn, course_id)
        .await?
        .ok_or_else(|| not_found(course_id))
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    course_ids: &[i64],
) -> Result<Vec<Course>, DomainError> {
    courses_adapter::find_by_ids(conn, course_ids)
        .await?
        .into_iter()
        .map(Course::try_from)
        .collect()
}

pub async fn list<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Course>, DomainError> {
    courses_adapter::list_all(conn)
        .await?
        .into_iter()
        .map(Course::try_from)
        .collect()
}

pub async fn create_course<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    new: NewCourse,
) -> Result<Course, DomainError> {
    let dto = courses_adapter::CourseCreate {
        name: new.name,
        country: new.country,
        slope_rating: new.slope_rating,
        hole_pars: encode_holes(new.layout.pars())?,
        hole_stroke_indices: encode_holes(new.layout.stroke_indices())?,
    };
    Course::try_from(courses_adapter::create_course(conn, dto).await?)
}

/// Apply a patch. Either array may change alone; the merged layout is
/// re-validated before anything is written.
pub async fn update_course<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    course_id: i64,
    patch: CoursePatch,
) -> Result<Course, DomainError> {
    let existing = require_course(conn, course_id).await?;

    let mut dto = courses_adapter::CourseUpdate {
        name: patch.name,
        country: patch.country,
        slope_rating: patch.slope_rating,
        ..courses_adapter::CourseUpdate::default()
    };
    if patch.pars.is_some() || patch.stroke_indices.is_some() {
        let layout = CourseLayout::new(
            patch
                .pars
                .unwrap_or_else(|| existing.layout.pars().to_vec()),
            patch
                .stroke_indices
                .unwrap_or_else(|| existing.layout.stroke_indices().to_vec()),
        )?;
        dto.hole_pars = Some(encode_holes(layout.pars())?);
        dto.hole_stroke_indices = Some(encode_holes(layout.stroke_indices())?);
    }

    Course::try_from(courses_adapter::update_course(conn, course_id, dto).await?)
}

pub async fn delete_course<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    course_id: i64,
) -> Result<(), DomainError> {
    match courses_adapter::delete_course(conn, course_id).await? {
        0 => Err(not_found(course_id)),
        _ => Ok(()),
    }
}
