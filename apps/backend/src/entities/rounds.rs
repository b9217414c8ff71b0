use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rounds")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "tournament_id")]
    pub tournament_id: i64,
    #[sea_orm(column_name = "player_id")]
    pub player_id: i64,
    #[sea_orm(column_name = "course_id")]
    pub course_id: i64,
    #[sea_orm(column_name = "round_number")]
    pub round_number: i32,
    #[sea_orm(column_name = "date_played")]
    pub date_played: Date,
    /// Snapshot taken at initiation
    #[sea_orm(column_name = "player_handicap_index")]
    pub player_handicap_index: Option<f64>,
    #[sea_orm(column_name = "player_playing_handicap")]
    pub player_playing_handicap: Option<i32>,
    #[sea_orm(column_name = "gross_front9")]
    pub gross_front9: Option<i32>,
    #[sea_orm(column_name = "gross_back9")]
    pub gross_back9: Option<i32>,
    #[sea_orm(column_name = "gross_total")]
    pub gross_total: Option<i32>,
    #[sea_orm(column_name = "nett_front9")]
    pub nett_front9: Option<i32>,
    #[sea_orm(column_name = "nett_back9")]
    pub nett_back9: Option<i32>,
    #[sea_orm(column_name = "nett_total")]
    pub nett_total: Option<i32>,
    #[sea_orm(column_name = "stableford_front9")]
    pub stableford_front9: Option<i32>,
    #[sea_orm(column_name = "stableford_back9")]
    pub stableford_back9: Option<i32>,
    #[sea_orm(column_name = "stableford_total")]
    pub stableford_total: Option<i32>,
    #[sea_orm(column_name = "is_finalized")]
    pub is_finalized: bool,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tournaments::Entity",
        from = "Column::TournamentId",
        to = "super::tournaments::Column::Id"
    )]
    Tournament,
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::PlayerId",
        to = "super::players::Column::Id"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::hole_scores::Entity")]
    HoleScores,
}

impl Related<super::tournaments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::hole_scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HoleScores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
