//! Handicap stroke allocation per hole.

/// Holes on a full course; stroke indices run 1..=HOLES.
pub const HOLES: i32 = 18;

/// Strokes a player receives (positive) or gives back (negative) on one hole.
///
/// Positive handicaps spread `h div 18` strokes on every hole plus one more on
/// the `h mod 18` hardest holes (lowest stroke index). Plus handicaps mirror
/// that: the remainder is taken back on the easiest holes (highest stroke
/// index). Either input missing yields no allocation.
///
/// Summed over stroke indices 1..=18 the result always equals `h`.
pub fn strokes(playing_handicap: Option<i32>, stroke_index: Option<i32>) -> i32 {
    let (Some(h), Some(si)) = (playing_handicap, stroke_index) else {
        return 0;
    };

    if h > 0 {
        let base = h / HOLES;
        let extra = i32::from(si <= h % HOLES);
        base + extra
    } else if h < 0 {
        let a = h.saturating_neg();
        let base = -(a / HOLES);
        let extra = i32::from(si > HOLES - a % HOLES);
        base - extra
    } else {
        0
    }
}
