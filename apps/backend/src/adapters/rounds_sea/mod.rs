//! SeaORM adapter for rounds - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::rounds;
use crate::infra::db_errors::ROUND_ALREADY_FINALIZED;

pub mod dto;

pub use dto::{RoundCreate, RoundFilter, RoundTotals};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Option<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find_by_id(round_id).one(conn).await
}

pub async fn create_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoundCreate,
) -> Result<rounds::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = rounds::ActiveModel {
        id: NotSet,
        tournament_id: Set(dto.tournament_id),
        player_id: Set(dto.player_id),
        course_id: Set(dto.course_id),
        round_number: Set(dto.round_number),
        date_played: Set(dto.date_played),
        player_handicap_index: Set(dto.player_handicap_index),
        player_playing_handicap: Set(dto.player_playing_handicap),
        gross_front9: Set(None),
        gross_back9: Set(None),
        gross_total: Set(None),
        nett_front9: Set(None),
        nett_back9: Set(None),
        nett_total: Set(None),
        stableford_front9: Set(None),
        stableford_back9: Set(None),
        stableford_total: Set(None),
        is_finalized: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

pub async fn list_filtered<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: RoundFilter,
) -> Result<Vec<rounds::Model>, sea_orm::DbErr> {
    let mut query = rounds::Entity::find();
    if let Some(tournament_id) = filter.tournament_id {
        query = query.filter(rounds::Column::TournamentId.eq(tournament_id));
    }
    if let Some(player_id) = filter.player_id {
        query = query.filter(rounds::Column::PlayerId.eq(player_id));
    }
    if let Some(course_id) = filter.course_id {
        query = query.filter(rounds::Column::CourseId.eq(course_id));
    }
    if let Some(round_number) = filter.round_number {
        query = query.filter(rounds::Column::RoundNumber.eq(round_number));
    }
    if let Some(player_ids) = filter.player_ids {
        query = query.filter(rounds::Column::PlayerId.is_in(player_ids));
    }
    query.order_by_asc(rounds::Column::Id).all(conn).await
}

/// All rounds of one tournament stage.
pub async fn find_by_tournament_and_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    round_number: i32,
) -> Result<Vec<rounds::Model>, sea_orm::DbErr> {
    list_filtered(
        conn,
        RoundFilter {
            tournament_id: Some(tournament_id),
            round_number: Some(round_number),
            ..RoundFilter::default()
        },
    )
    .await
}

pub async fn update_totals<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    totals: RoundTotals,
) -> Result<rounds::Model, sea_orm::DbErr> {
    let existing = find_by_id(conn, round_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Round not found".to_string()))?;

    let mut active: rounds::ActiveModel = existing.into();
    active.gross_front9 = Set(Some(totals.gross_front9));
    active.gross_back9 = Set(Some(totals.gross_back9));
    active.gross_total = Set(Some(totals.gross_total));
    active.nett_front9 = Set(Some(totals.nett_front9));
    active.nett_back9 = Set(Some(totals.nett_back9));
    active.nett_total = Set(Some(totals.nett_total));
    active.stableford_front9 = Set(Some(totals.stableford_front9));
    active.stableford_back9 = Set(Some(totals.stableford_back9));
    active.stableford_total = Set(Some(totals.stableford_total));
    active.updated_at = Set(time::OffsetDateTime::now_utc());
    active.update(conn).await
}

/// Flip an open round to finalized.
///
/// The update only matches while `is_finalized = false`; when another
/// transaction got there first, fails with the `ROUND_ALREADY_FINALIZED` marker.
pub async fn finalize_open<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<(), sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let result = rounds::Entity::update_many()
        .col_expr(rounds::Column::IsFinalized, Expr::val(true).into())
        .col_expr(rounds::Column::UpdatedAt, Expr::val(now).into())
        .filter(rounds::Column::Id.eq(round_id))
        .filter(rounds::Column::IsFinalized.eq(false))
        .exec(conn)
        .await?;

    if result.rows_affected == 1 {
        return Ok(());
    }
    match find_by_id(conn, round_id).await? {
        Some(_) => Err(sea_orm::DbErr::Custom(format!(
            "{ROUND_ALREADY_FINALIZED}{round_id}"
        ))),
        None => Err(sea_orm::DbErr::RecordNotFound("Round not found".to_string())),
    }
}

pub async fn set_finalized<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    is_finalized: bool,
) -> Result<u64, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let result = rounds::Entity::update_many()
        .col_expr(rounds::Column::IsFinalized, Expr::val(is_finalized).into())
        .col_expr(rounds::Column::UpdatedAt, Expr::val(now).into())
        .filter(rounds::Column::Id.eq(round_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
