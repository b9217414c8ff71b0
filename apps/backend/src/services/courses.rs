//! Course service, including the per-hole listing.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::info;

use crate::domain::{CourseLayout, HoleInfo};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::courses::{self, Course, CoursePatch, NewCourse};

/// Course fields as supplied by a client; arrays are validated here.
#[derive(Debug, Clone, Default)]
pub struct CourseInput {
    pub name: String,
    pub country: Option<String>,
    pub slope_rating: Option<f64>,
    pub hole_pars: Vec<i32>,
    pub hole_stroke_indices: Vec<i32>,
}

fn check_slope(slope_rating: Option<f64>) -> Result<(), DomainError> {
    match slope_rating {
        Some(s) if !s.is_finite() || s <= 0.0 => Err(DomainError::validation(
            ValidationKind::InvalidCourseLayout,
            format!("Slope rating must be positive, got {s}"),
        )),
        _ => Ok(()),
    }
}

fn require_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation(
            ValidationKind::MissingField,
            "Course name is required",
        ));
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct CourseService;

impl CourseService {
    pub fn new() -> Self {
        Self
    }

    pub async fn create(
        &self,
        txn: &DatabaseTransaction,
        input: CourseInput,
    ) -> Result<Course, AppError> {
        require_name(&input.name)?;
        check_slope(input.slope_rating)?;
        let layout = CourseLayout::new(input.hole_pars, input.hole_stroke_indices)?;

        let course = courses::create_course(
            txn,
            NewCourse {
                name: input.name,
                country: input.country,
                slope_rating: input.slope_rating,
                layout,
            },
        )
        .await?;
        info!(
            course_id = course.id,
            complete = course.layout.is_complete(),
            "Course created"
        );
        Ok(course)
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        course_id: i64,
    ) -> Result<Course, AppError> {
        Ok(courses::require_course(conn, course_id).await?)
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Course>, AppError> {
        Ok(courses::list(conn).await?)
    }

    pub async fn update(
        &self,
        txn: &DatabaseTransaction,
        course_id: i64,
        patch: CoursePatch,
    ) -> Result<Course, AppError> {
        if let Some(name) = &patch.name {
            require_name(name)?;
        }
        if let Some(slope) = patch.slope_rating {
            check_slope(slope)?;
        }
        Ok(courses::update_course(txn, course_id, patch).await?)
    }

    /// Fails with a validation error while rounds still reference the course.
    pub async fn delete(&self, txn: &DatabaseTransaction, course_id: i64) -> Result<(), AppError> {
        courses::delete_course(txn, course_id).await?;
        info!(course_id, "Course deleted");
        Ok(())
    }

    /// Always 18 rows; par and stroke index are `None` where not configured.
    pub async fn holes<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        course_id: i64,
    ) -> Result<Vec<HoleInfo>, AppError> {
        let course = courses::require_course(conn, course_id).await?;
        Ok(course.layout.holes())
    }
}
