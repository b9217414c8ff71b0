//! Repository functions: domain models over the SeaORM adapters.

pub mod adjustments;
pub mod courses;
pub mod hole_scores;
pub mod memberships;
pub mod players;
pub mod rounds;
pub mod tournaments;
