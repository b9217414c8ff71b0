//! Player repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::players_sea as players_adapter;
use crate::entities::players;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Player domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub name: String,
    /// Live handicap index; `None` until the player has one.
    pub handicap: Option<f64>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            handicap: model.handicap,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

fn not_found(player_id: i64) -> DomainError {
    DomainError::not_found(
        NotFoundKind::Player,
        format!("Player {player_id} not found"),
    )
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<Player>, DomainError> {
    let player = players_adapter::find_by_id(conn, player_id).await?;
    Ok(player.map(Player::from))
}

pub async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Player, DomainError> {
    find_by_id(conn, player_id)
        .await?
        .ok_or_else(|| not_found(player_id))
}

/// Players that exist among `player_ids`; unknown ids are dropped.
pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: &[i64],
) -> Result<Vec<Player>, DomainError> {
    let players = players_adapter::find_by_ids(conn, player_ids).await?;
    Ok(players.into_iter().map(Player::from).collect())
}

pub async fn list<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Player>, DomainError> {
    let players = players_adapter::list_all(conn).await?;
    Ok(players.into_iter().map(Player::from).collect())
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: players_adapter::PlayerCreate,
) -> Result<Player, DomainError> {
    let player = players_adapter::create_player(conn, dto).await?;
    Ok(Player::from(player))
}

pub async fn update_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    dto: players_adapter::PlayerUpdate,
) -> Result<Player, DomainError> {
    require_player(conn, player_id).await?;
    let player = players_adapter::update_player(conn, player_id, dto).await?;
    Ok(Player::from(player))
}

pub async fn set_handicap<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    handicap: Option<f64>,
) -> Result<(), DomainError> {
    require_player(conn, player_id).await?;
    players_adapter::set_handicap(conn, player_id, handicap).await?;
    Ok(())
}

pub async fn delete_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<(), DomainError> {
    match players_adapter::delete_player(conn, player_id).await? {
        0 => Err(not_found(player_id)),
        _ => Ok(()),
    }
}
