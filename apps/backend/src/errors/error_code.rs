//! Error codes for the Fairway API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// General validation error
    ValidationError,
    /// Malformed request body
    BadRequest,
    /// Hole number outside 1..=18
    InvalidHoleNumber,
    /// Gross score missing or below one
    InvalidGrossScore,
    /// Score submission without exactly 18 holes
    WrongScoreCount,
    /// Same hole submitted twice
    DuplicateHole,
    /// Pars or stroke indices malformed
    InvalidCourseLayout,
    /// Course pars/stroke indices not fully configured
    IncompleteCourseData,
    /// A round in the batch has no Stableford total
    IncompleteScores,
    /// Course has no slope rating
    CourseNotReady,
    /// Round is not finalized
    NotFinalized,
    /// Required field absent
    MissingField,

    // Resource Not Found
    PlayerNotFound,
    CourseNotFound,
    TournamentNotFound,
    RoundNotFound,
    AdjustmentNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    UniquePlayerName,
    UniqueCourseName,
    UniqueTournamentName,
    /// Adjustment for that Stableford score already exists
    AdjustmentExists,
    /// Round is locked against score edits
    RoundFinalized,
    /// Lost a race to finalize a round
    RoundAlreadyFinalized,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,
    /// Stored data could not be decoded
    DataCorruption,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidHoleNumber => "INVALID_HOLE_NUMBER",
            Self::InvalidGrossScore => "INVALID_GROSS_SCORE",
            Self::WrongScoreCount => "WRONG_SCORE_COUNT",
            Self::DuplicateHole => "DUPLICATE_HOLE",
            Self::InvalidCourseLayout => "INVALID_COURSE_LAYOUT",
            Self::IncompleteCourseData => "INCOMPLETE_COURSE_DATA",
            Self::IncompleteScores => "INCOMPLETE_SCORES",
            Self::CourseNotReady => "COURSE_NOT_READY",
            Self::NotFinalized => "NOT_FINALIZED",
            Self::MissingField => "MISSING_FIELD",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::CourseNotFound => "COURSE_NOT_FOUND",
            Self::TournamentNotFound => "TOURNAMENT_NOT_FOUND",
            Self::RoundNotFound => "ROUND_NOT_FOUND",
            Self::AdjustmentNotFound => "ADJUSTMENT_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniquePlayerName => "UNIQUE_PLAYER_NAME",
            Self::UniqueCourseName => "UNIQUE_COURSE_NAME",
            Self::UniqueTournamentName => "UNIQUE_TOURNAMENT_NAME",
            Self::AdjustmentExists => "ADJUSTMENT_EXISTS",
            Self::RoundFinalized => "ROUND_FINALIZED",
            Self::RoundAlreadyFinalized => "ROUND_ALREADY_FINALIZED",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
