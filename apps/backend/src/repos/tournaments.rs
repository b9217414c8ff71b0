//! Tournament repository functions.

use sea_orm::ConnectionTrait;
use time::{Date, OffsetDateTime};

use crate::adapters::tournaments_sea as tournaments_adapter;
use crate::entities::tournaments;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Tournament domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    pub date: Option<Date>,
    pub location: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<tournaments::Model> for Tournament {
    fn from(model: tournaments::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            date: model.date,
            location: model.location,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

fn not_found(tournament_id: i64) -> DomainError {
    DomainError::not_found(
        NotFoundKind::Tournament,
        format!("Tournament {tournament_id} not found"),
    )
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Option<Tournament>, DomainError> {
    let tournament = tournaments_adapter::find_by_id(conn, tournament_id).await?;
    Ok(tournament.map(Tournament::from))
}

pub async fn require_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Tournament, DomainError> {
    find_by_id(conn, tournament_id)
        .await?
        .ok_or_else(|| not_found(tournament_id))
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Tournament>, DomainError> {
    let tournaments = tournaments_adapter::list_all(conn).await?;
    Ok(tournaments.into_iter().map(Tournament::from).collect())
}

pub async fn create_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: tournaments_adapter::TournamentCreate,
) -> Result<Tournament, DomainError> {
    let tournament = tournaments_adapter::create_tournament(conn, dto).await?;
    Ok(Tournament::from(tournament))
}

pub async fn update_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    dto: tournaments_adapter::TournamentUpdate,
) -> Result<Tournament, DomainError> {
    require_tournament(conn, tournament_id).await?;
    let tournament = tournaments_adapter::update_tournament(conn, tournament_id, dto).await?;
    Ok(Tournament::from(tournament))
}

pub async fn delete_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<(), DomainError> {
    match tournaments_adapter::delete_tournament(conn, tournament_id).await? {
        0 => Err(not_found(tournament_id)),
        _ => Ok(()),
    }
}
