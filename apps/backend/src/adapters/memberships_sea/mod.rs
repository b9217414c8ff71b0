//! SeaORM adapter for tournament membership tables (players and course slots).

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::{tournament_courses, tournament_players};

pub mod dto;

pub use dto::CourseSlot;

pub async fn player_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    tournament_players::Entity::find()
        .select_only()
        .column(tournament_players::Column::PlayerId)
        .filter(tournament_players::Column::TournamentId.eq(tournament_id))
        .order_by_asc(tournament_players::Column::Id)
        .into_tuple::<i64>()
        .all(conn)
        .await
}

/// Insert the pair unless it exists. Returns whether a row was added.
pub async fn add_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    player_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let active = tournament_players::ActiveModel {
        id: NotSet,
        tournament_id: Set(tournament_id),
        player_id: Set(player_id),
    };
    let rows = tournament_players::Entity::insert(active)
        .on_conflict(
            OnConflict::columns([
                tournament_players::Column::TournamentId,
                tournament_players::Column::PlayerId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;
    Ok(rows == 1)
}

pub async fn remove_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    player_ids: &[i64],
) -> Result<u64, sea_orm::DbErr> {
    if player_ids.is_empty() {
        return Ok(0);
    }
    let result = tournament_players::Entity::delete_many()
        .filter(tournament_players::Column::TournamentId.eq(tournament_id))
        .filter(tournament_players::Column::PlayerId.is_in(player_ids.iter().copied()))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Course slots ordered by sequence number.
pub async fn course_slots<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Vec<tournament_courses::Model>, sea_orm::DbErr> {
    tournament_courses::Entity::find()
        .filter(tournament_courses::Column::TournamentId.eq(tournament_id))
        .order_by_asc(tournament_courses::Column::SequenceNumber)
        .order_by_asc(tournament_courses::Column::Id)
        .all(conn)
        .await
}

pub async fn add_course<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    slot: CourseSlot,
) -> Result<bool, sea_orm::DbErr> {
    let active = tournament_courses::ActiveModel {
        id: NotSet,
        tournament_id: Set(tournament_id),
        course_id: Set(slot.course_id),
        sequence_number: Set(slot.sequence_number),
    };
    let rows = tournament_courses::Entity::insert(active)
        .on_conflict(
            OnConflict::columns([
                tournament_courses::Column::TournamentId,
                tournament_courses::Column::CourseId,
                tournament_courses::Column::SequenceNumber,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;
    Ok(rows == 1)
}

pub async fn remove_course<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    slot: CourseSlot,
) -> Result<u64, sea_orm::DbErr> {
    let result = tournament_courses::Entity::delete_many()
        .filter(tournament_courses::Column::TournamentId.eq(tournament_id))
        .filter(tournament_courses::Column::CourseId.eq(slot.course_id))
        .filter(tournament_courses::Column::SequenceNumber.eq(slot.sequence_number))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
