//! Tournament membership repository: players entered and course slots.

use sea_orm::ConnectionTrait;

use crate::adapters::memberships_sea as memberships_adapter;
pub use crate::adapters::memberships_sea::CourseSlot;
use crate::entities::tournament_courses;
use crate::errors::domain::DomainError;

/// A course scheduled at one stage of a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TournamentCourseSlot {
    pub id: i64,
    pub course_id: i64,
    pub sequence_number: i32,
}

impl From<tournament_courses::Model> for TournamentCourseSlot {
    fn from(model: tournament_courses::Model) -> Self {
        Self {
            id: model.id,
            course_id: model.course_id,
            sequence_number: model.sequence_number,
        }
    }
}

pub async fn player_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Vec<i64>, DomainError> {
    Ok(memberships_adapter::player_ids(conn, tournament_id).await?)
}

pub async fn add_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    player_id: i64,
) -> Result<bool, DomainError> {
    Ok(memberships_adapter::add_player(conn, tournament_id, player_id).await?)
}

pub async fn remove_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    player_ids: &[i64],
) -> Result<u64, DomainError> {
    Ok(memberships_adapter::remove_players(conn, tournament_id, player_ids).await?)
}

pub async fn course_slots<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Vec<TournamentCourseSlot>, DomainError> {
    let slots = memberships_adapter::course_slots(conn, tournament_id).await?;
    Ok(slots.into_iter().map(TournamentCourseSlot::from).collect())
}

pub async fn add_course<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    slot: CourseSlot,
) -> Result<bool, DomainError> {
    Ok(memberships_adapter::add_course(conn, tournament_id, slot).await?)
}

pub async fn remove_course<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    slot: CourseSlot,
) -> Result<u64, DomainError> {
    Ok(memberships_adapter::remove_course(conn, tournament_id, slot).await?)
}
