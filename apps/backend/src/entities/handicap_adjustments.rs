use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Adjustment applied to a handicap index for a given Stableford total.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "handicap_adjustments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub stableford_score: i32,
    pub adjustment: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
