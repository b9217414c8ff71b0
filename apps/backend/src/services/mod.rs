//! Business operations. Mutations take the caller's `&DatabaseTransaction`;
//! reads accept any connection.

pub mod adjustments;
pub mod courses;
pub mod leaderboard;
pub mod players;
pub mod round_lifecycle;
pub mod rounds;
pub mod scoring;
pub mod tournaments;
