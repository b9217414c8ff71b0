//! SeaORM -> DomainError translation.
//!
//! Adapters return `sea_orm::DbErr`; repos convert here (directly or via `?`),
//! and handlers then map `DomainError` to `AppError`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Prefix adapters put on `DbErr::Custom` when a guarded finalize update hit no row.
pub const ROUND_ALREADY_FINALIZED: &str = "ROUND_ALREADY_FINALIZED:";

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract `table.column` from SQLite "UNIQUE constraint failed: table.column".
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let prefix = error_msg.find("UNIQUE constraint failed: ")?;
    let rest = &error_msg[prefix + "UNIQUE constraint failed: ".len()..];
    rest.split(|c: char| c.is_whitespace() || c == ',' || c == '"')
        .next()
}

fn map_sqlite_table_column_to_conflict(
    table_column: &str,
) -> Option<(ConflictKind, &'static str)> {
    match table_column {
        "players.name" => Some((ConflictKind::UniquePlayerName, "Player name already exists")),
        "courses.name" => Some((ConflictKind::UniqueCourseName, "Course name already exists")),
        "tournaments.name" => Some((
            ConflictKind::UniqueTournamentName,
            "Tournament name already exists",
        )),
        "handicap_adjustments.stableford_score" => Some((
            ConflictKind::AdjustmentExists,
            "Adjustment for this Stableford score already exists",
        )),
        _ => None,
    }
}

fn map_postgres_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("ux_players_name") {
        return Some((ConflictKind::UniquePlayerName, "Player name already exists"));
    }
    if error_msg.contains("ux_courses_name") {
        return Some((ConflictKind::UniqueCourseName, "Course name already exists"));
    }
    if error_msg.contains("ux_tournaments_name") {
        return Some((
            ConflictKind::UniqueTournamentName,
            "Tournament name already exists",
        ));
    }
    if error_msg.contains("handicap_adjustments_pkey") {
        return Some((
            ConflictKind::AdjustmentExists,
            "Adjustment for this Stableford score already exists",
        ));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with(ROUND_ALREADY_FINALIZED) => {
            let round_id = msg.trim_start_matches(ROUND_ALREADY_FINALIZED);
            warn!(trace_id = %trace_id, round_id = %round_id, "Round finalized by a concurrent transaction");
            return DomainError::conflict(
                ConflictKind::RoundAlreadyFinalized,
                format!("Round {round_id} was finalized by another request; please retry"),
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");

        if let Some(table_column) = extract_sqlite_table_column(&error_msg) {
            if let Some((kind, detail)) = map_sqlite_table_column_to_conflict(table_column) {
                return DomainError::conflict(kind, detail);
            }
        }
        if let Some((kind, detail)) = map_postgres_constraint_to_conflict(&error_msg) {
            return DomainError::conflict(kind, detail);
        }

        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::validation_other("Record is referenced by or refers to a missing row");
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
