//! Handicap index arithmetic.

/// Slope rating of a course of standard difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

/// Slope-adjusted playing handicap, rounded half to even.
///
/// A player without an index has no playing handicap.
pub fn playing_handicap(index: Option<f64>, slope_rating: f64) -> Option<i32> {
    index.map(|i| (i * slope_rating / STANDARD_SLOPE).round_ties_even() as i32)
}

/// Apply an adjustment to a handicap index, keeping one decimal place.
///
/// The sum is scaled to tenths and a half goes to the even tenth. Rounding
/// follows the scaled binary value, so a sum such as 0.15, stored just below
/// the half, still rounds up to 0.2.
pub fn adjusted_index(current: f64, adjustment: f64) -> f64 {
    ((current + adjustment) * 10.0).round_ties_even() / 10.0
}
