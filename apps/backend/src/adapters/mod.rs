//! SeaORM adapters. Functions return `DbErr`; repos map to `DomainError`.

pub mod adjustments_sea;
pub mod courses_sea;
pub mod hole_scores_sea;
pub mod memberships_sea;
pub mod players_sea;
pub mod rounds_sea;
pub mod tournaments_sea;
