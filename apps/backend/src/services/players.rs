//! Player service.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::info;

use crate::adapters::players_sea::{PlayerCreate, PlayerUpdate};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::players::{self, Player};

fn require_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation(
            ValidationKind::MissingField,
            "Player name is required",
        ));
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct PlayerService;

impl PlayerService {
    pub fn new() -> Self {
        Self
    }

    pub async fn create(
        &self,
        txn: &DatabaseTransaction,
        dto: PlayerCreate,
    ) -> Result<Player, AppError> {
        require_name(&dto.name)?;
        let player = players::create_player(txn, dto).await?;
        info!(player_id = player.id, "Player created");
        Ok(player)
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        player_id: i64,
    ) -> Result<Player, AppError> {
        Ok(players::require_player(conn, player_id).await?)
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Player>, AppError> {
        Ok(players::list(conn).await?)
    }

    pub async fn update(
        &self,
        txn: &DatabaseTransaction,
        player_id: i64,
        dto: PlayerUpdate,
    ) -> Result<Player, AppError> {
        if let Some(name) = &dto.name {
            require_name(name)?;
        }
        Ok(players::update_player(txn, player_id, dto).await?)
    }

    pub async fn delete(&self, txn: &DatabaseTransaction, player_id: i64) -> Result<(), AppError> {
        players::delete_player(txn, player_id).await?;
        info!(player_id, "Player deleted");
        Ok(())
    }
}
