//! Per-hole course configuration: pars and stroke indices.

use crate::domain::allocation::HOLES;
use crate::errors::domain::{DomainError, ValidationKind};

/// Pars and stroke indices for holes 1..=18, in hole order.
///
/// Either array may be empty, meaning "not configured yet".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseLayout {
    pars: Vec<i32>,
    stroke_indices: Vec<i32>,
}

/// One row of the hole listing; `None` where the course is not configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleInfo {
    pub hole_number: i32,
    pub par: Option<i32>,
    pub stroke_index: Option<i32>,
}

impl CourseLayout {
    /// Validate a layout supplied by a client.
    pub fn new(pars: Vec<i32>, stroke_indices: Vec<i32>) -> Result<Self, DomainError> {
        let holes = HOLES as usize;

        if !pars.is_empty() {
            if pars.len() != holes {
                return Err(DomainError::validation(
                    ValidationKind::InvalidCourseLayout,
                    format!("Expected {holes} pars, got {}", pars.len()),
                ));
            }
            if let Some(bad) = pars.iter().find(|p| **p < 1) {
                return Err(DomainError::validation(
                    ValidationKind::InvalidCourseLayout,
                    format!("Par must be positive, got {bad}"),
                ));
            }
        }

        if !stroke_indices.is_empty() {
            if stroke_indices.len() != holes {
                return Err(DomainError::validation(
                    ValidationKind::InvalidCourseLayout,
                    format!("Expected {holes} stroke indices, got {}", stroke_indices.len()),
                ));
            }
            let mut sorted = stroke_indices.clone();
            sorted.sort_unstable();
            if !sorted.iter().copied().eq(1..=HOLES) {
                return Err(DomainError::validation(
                    ValidationKind::InvalidCourseLayout,
                    format!("Stroke indices must be a permutation of 1..={HOLES}"),
                ));
            }
        }

        Ok(Self {
            pars,
            stroke_indices,
        })
    }

    /// Wrap arrays already persisted; no validation.
    pub fn from_stored(pars: Vec<i32>, stroke_indices: Vec<i32>) -> Self {
        Self {
            pars,
            stroke_indices,
        }
    }

    pub fn pars(&self) -> &[i32] {
        &self.pars
    }

    pub fn stroke_indices(&self) -> &[i32] {
        &self.stroke_indices
    }

    pub fn is_complete(&self) -> bool {
        self.pars.len() == HOLES as usize && self.stroke_indices.len() == HOLES as usize
    }

    /// Scoring needs all 18 pars and stroke indices.
    pub fn require_complete(&self) -> Result<(), DomainError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(DomainError::validation(
                ValidationKind::IncompleteCourseData,
                format!(
                    "Course needs {HOLES} pars and {HOLES} stroke indices (has {} and {})",
                    self.pars.len(),
                    self.stroke_indices.len()
                ),
            ))
        }
    }

    pub fn par(&self, hole_number: i32) -> Option<i32> {
        Self::at(&self.pars, hole_number)
    }

    pub fn stroke_index(&self, hole_number: i32) -> Option<i32> {
        Self::at(&self.stroke_indices, hole_number)
    }

    /// Always 18 rows, hole 1 first.
    pub fn holes(&self) -> Vec<HoleInfo> {
        (1..=HOLES)
            .map(|hole_number| HoleInfo {
                hole_number,
                par: self.par(hole_number),
                stroke_index: self.stroke_index(hole_number),
            })
            .collect()
    }

    fn at(values: &[i32], hole_number: i32) -> Option<i32> {
        let idx = usize::try_from(hole_number.checked_sub(1)?).ok()?;
        values.get(idx).copied()
    }
}
