//! Domain layer: pure scoring and handicap logic, no I/O.

pub mod allocation;
pub mod course_layout;
pub mod handicap;
pub mod hole;
pub mod leaderboard;
pub mod scorecard;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_allocation;
#[cfg(test)]
mod tests_props_scoring;

// Re-exports for ergonomics
pub use allocation::{strokes, HOLES};
pub use course_layout::{CourseLayout, HoleInfo};
pub use handicap::{adjusted_index, playing_handicap};
pub use hole::{score_hole, stableford_points, HoleResult};
pub use scorecard::{score_round, HoleEntry, RoundSummary, ScoredHole, Scorecard, SplitTotals};
