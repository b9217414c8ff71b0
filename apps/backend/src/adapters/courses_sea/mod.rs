//! SeaORM adapter for courses - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::courses;

pub mod dto;

pub use dto::{CourseCreate, CourseUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    course_id: i64,
) -> Result<Option<courses::Model>, sea_orm::DbErr> {
    courses::Entity::find_by_id(course_id).one(conn).await
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    course_ids: &[i64],
) -> Result<Vec<courses::Model>, sea_orm::DbErr> {
    if course_ids.is_empty() {
        return Ok(Vec::new());
    }
    courses::Entity::find()
        .filter(courses::Column::Id.is_in(course_ids.iter().copied()))
        .all(conn)
        .await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<courses::Model>, sea_orm::DbErr> {
    courses::Entity::find()
        .order_by_asc(courses::Column::Id)
        .all(conn)
        .await
}

pub async fn create_course<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CourseCreate,
) -> Result<courses::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = courses::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        country: Set(dto.country),
        slope_rating: Set(dto.slope_rating),
        hole_pars: Set(dto.hole_pars),
        hole_stroke_indices: Set(dto.hole_stroke_indices),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

pub async fn update_course<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    course_id: i64,
    dto: CourseUpdate,
) -> Result<courses::Model, sea_orm::DbErr> {
    let existing = find_by_id(conn, course_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Course not found".to_string()))?;

    let mut active: courses::ActiveModel = existing.into();
    if let Some(name) = dto.name {
        active.name = Set(name);
    }
    if let Some(country) = dto.country {
        active.country = Set(country);
    }
    if let Some(slope_rating) = dto.slope_rating {
        active.slope_rating = Set(slope_rating);
    }
    if let Some(pars) = dto.hole_pars {
        active.hole_pars = Set(pars);
    }
    if let Some(indices) = dto.hole_stroke_indices {
        active.hole_stroke_indices = Set(indices);
    }
    active.updated_at = Set(time::OffsetDateTime::now_utc());
    active.update(conn).await
}

pub async fn delete_course<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    course_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = courses::Entity::delete_by_id(course_id).exec(conn).await?;
    Ok(result.rows_affected)
}
