//! SeaORM adapter for tournaments - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set};

use crate::entities::tournaments;

pub mod dto;

pub use dto::{TournamentCreate, TournamentUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Option<tournaments::Model>, sea_orm::DbErr> {
    tournaments::Entity::find_by_id(tournament_id).one(conn).await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<tournaments::Model>, sea_orm::DbErr> {
    tournaments::Entity::find()
        .order_by_asc(tournaments::Column::Id)
        .all(conn)
        .await
}

pub async fn create_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TournamentCreate,
) -> Result<tournaments::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = tournaments::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        date: Set(dto.date),
        location: Set(dto.location),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

pub async fn update_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    dto: TournamentUpdate,
) -> Result<tournaments::Model, sea_orm::DbErr> {
    let existing = find_by_id(conn, tournament_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Tournament not found".to_string()))?;

    let mut active: tournaments::ActiveModel = existing.into();
    if let Some(name) = dto.name {
        active.name = Set(name);
    }
    if let Some(date) = dto.date {
        active.date = Set(date);
    }
    if let Some(location) = dto.location {
        active.location = Set(location);
    }
    active.updated_at = Set(time::OffsetDateTime::now_utc());
    active.update(conn).await
}

pub async fn delete_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = tournaments::Entity::delete_by_id(tournament_id)
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
