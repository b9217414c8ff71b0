//! Round aggregation: 18 hole results into front/back/total summaries.

use std::collections::HashSet;

use crate::domain::allocation::HOLES;
use crate::domain::course_layout::CourseLayout;
use crate::domain::hole::score_hole;
use crate::errors::domain::{DomainError, ValidationKind};

/// Last hole of the front nine.
pub const FRONT_NINE_LAST: i32 = 9;

/// One submitted gross score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleEntry {
    pub hole_number: i32,
    pub gross_score: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredHole {
    pub hole_number: i32,
    pub gross: i32,
    pub nett: i32,
    pub stableford: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitTotals {
    pub front9: i32,
    pub back9: i32,
    pub total: i32,
}

impl SplitTotals {
    fn add(&mut self, hole_number: i32, value: i32) -> Result<(), DomainError> {
        let half = if hole_number <= FRONT_NINE_LAST {
            &mut self.front9
        } else {
            &mut self.back9
        };
        match (half.checked_add(value), self.total.checked_add(value)) {
            (Some(h), Some(t)) => {
                *half = h;
                self.total = t;
                Ok(())
            }
            _ => Err(DomainError::validation_other(format!(
                "Round totals overflow at hole {hole_number}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundSummary {
    pub gross: SplitTotals,
    pub nett: SplitTotals,
    pub stableford: SplitTotals,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scorecard {
    /// Sorted by hole number.
    pub holes: Vec<ScoredHole>,
    pub summary: RoundSummary,
}

/// Score a full 18-hole submission.
///
/// Nothing is returned unless every entry is valid, so callers can persist
/// the result without partial writes.
pub fn score_round(
    layout: &CourseLayout,
    playing_handicap: Option<i32>,
    entries: &[HoleEntry],
) -> Result<Scorecard, DomainError> {
    if entries.len() != HOLES as usize {
        return Err(DomainError::validation(
            ValidationKind::WrongScoreCount,
            format!("Expected {HOLES} hole scores, got {}", entries.len()),
        ));
    }
    layout.require_complete()?;

    let mut seen = HashSet::with_capacity(entries.len());
    let mut holes = Vec::with_capacity(entries.len());
    let mut summary = RoundSummary::default();

    for entry in entries {
        let hole_number = entry.hole_number;
        let par = layout.par(hole_number);
        let result = score_hole(
            hole_number,
            par.unwrap_or_default(),
            playing_handicap,
            layout.stroke_index(hole_number),
            entry.gross_score,
        )?;
        if !seen.insert(hole_number) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateHole,
                format!("Hole {hole_number} submitted more than once"),
            ));
        }

        // score_hole accepted the hole number and gross, so both are present
        let gross = entry.gross_score.unwrap_or_default();
        summary.gross.add(hole_number, gross)?;
        summary.nett.add(hole_number, result.nett)?;
        summary.stableford.add(hole_number, result.stableford)?;
        holes.push(ScoredHole {
            hole_number,
            gross,
            nett: result.nett,
            stableford: result.stableford,
        });
    }

    holes.sort_by_key(|h| h.hole_number);
    Ok(Scorecard { holes, summary })
}
