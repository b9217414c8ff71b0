//! SeaORM adapter for players - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::players;

pub mod dto;

pub use dto::{PlayerCreate, PlayerUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(player_id).one(conn).await
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: &[i64],
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    if player_ids.is_empty() {
        return Ok(Vec::new());
    }
    players::Entity::find()
        .filter(players::Column::Id.is_in(player_ids.iter().copied()))
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = players::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        handicap: Set(dto.handicap),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

/// Apply a partial update. `RecordNotFound` when the row is missing.
pub async fn update_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    dto: PlayerUpdate,
) -> Result<players::Model, sea_orm::DbErr> {
    let existing = find_by_id(conn, player_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Player not found".to_string()))?;

    let mut active: players::ActiveModel = existing.into();
    if let Some(name) = dto.name {
        active.name = Set(name);
    }
    if let Some(handicap) = dto.handicap {
        active.handicap = Set(handicap);
    }
    active.updated_at = Set(time::OffsetDateTime::now_utc());
    active.update(conn).await
}

/// Overwrite the live handicap index.
pub async fn set_handicap<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    handicap: Option<f64>,
) -> Result<(), sea_orm::DbErr> {
    update_player(
        conn,
        player_id,
        PlayerUpdate {
            name: None,
            handicap: Some(handicap),
        },
    )
    .await
    .map(|_| ())
}

/// Returns the number of rows deleted (0 or 1).
pub async fn delete_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = players::Entity::delete_by_id(player_id).exec(conn).await?;
    Ok(result.rows_affected)
}
