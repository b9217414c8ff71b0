//! Per-hole nett score and Stableford points.

use crate::domain::allocation::{strokes, HOLES};
use crate::errors::domain::{DomainError, ValidationKind};

/// Highest gross score accepted on a single hole.
pub const MAX_GROSS_SCORE: i32 = 99;

/// Outcome of scoring one hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleResult {
    pub allocation: i32,
    pub nett: i32,
    pub stableford: i32,
}

/// Points for a gross score against a handicap-adjusted par.
///
/// Two or more under earns 4, capped there.
pub fn stableford_points(gross: i32, adjusted_par: i32) -> i32 {
    match gross.saturating_sub(adjusted_par) {
        d if d <= -2 => 4,
        -1 => 3,
        0 => 2,
        1 => 1,
        _ => 0,
    }
}

/// Score one hole against its par and stroke index.
///
/// The hole number must lie in 1..=18 and the gross score must be present
/// and within 1..=[`MAX_GROSS_SCORE`]; anything else is a validation error.
pub fn score_hole(
    hole_number: i32,
    par: i32,
    playing_handicap: Option<i32>,
    stroke_index: Option<i32>,
    gross: Option<i32>,
) -> Result<HoleResult, DomainError> {
    if !(1..=HOLES).contains(&hole_number) {
        return Err(DomainError::validation(
            ValidationKind::InvalidHoleNumber,
            format!("Hole number {hole_number} is outside 1..={HOLES}"),
        ));
    }
    let gross = gross.ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidGrossScore,
            format!("Gross score missing for hole {hole_number}"),
        )
    })?;
    if !(1..=MAX_GROSS_SCORE).contains(&gross) {
        return Err(DomainError::validation(
            ValidationKind::InvalidGrossScore,
            format!(
                "Gross score for hole {hole_number} must be between 1 and {MAX_GROSS_SCORE}, got {gross}"
            ),
        ));
    }

    let allocation = strokes(playing_handicap, stroke_index);
    Ok(HoleResult {
        allocation,
        nett: gross.saturating_sub(allocation),
        stableford: stableford_points(gross, par.saturating_add(allocation)),
    })
}
