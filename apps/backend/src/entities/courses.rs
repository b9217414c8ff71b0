use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub country: Option<String>,
    #[sea_orm(column_name = "slope_rating")]
    pub slope_rating: Option<f64>,
    /// JSON array text, `[]` when not configured
    #[sea_orm(column_name = "hole_pars", column_type = "Text")]
    pub hole_pars: String,
    #[sea_orm(column_name = "hole_stroke_indices", column_type = "Text")]
    pub hole_stroke_indices: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rounds::Entity")]
    Rounds,
    #[sea_orm(has_many = "super::tournament_courses::Entity")]
    TournamentCourses,
}

impl Related<super::rounds::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rounds.def()
    }
}

impl Related<super::tournament_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TournamentCourses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
