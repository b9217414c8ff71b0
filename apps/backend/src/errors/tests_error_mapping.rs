// Unit tests for DomainError -> AppError mapping; no HTTP server or database involved
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_scoring_validation_to_400() {
    let de = DomainError::validation(ValidationKind::WrongScoreCount, "need 18 holes");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::WrongScoreCount);
    assert_eq!(app.status().as_u16(), 400);

    let de = DomainError::validation(ValidationKind::IncompleteScores, "Bob has no total");
    let app: AppError = de.into();
    assert_eq!(app.code().as_str(), "INCOMPLETE_SCORES");
    assert_eq!(app.status().as_u16(), 400);
    assert_eq!(app.detail(), "Bob has no total");
}

#[test]
fn course_not_ready_is_unprocessable() {
    let de = DomainError::validation(ValidationKind::CourseNotReady, "no slope");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::CourseNotReady);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn other_validation_falls_back_to_generic_code() {
    let app: AppError = DomainError::validation_other("bad field").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_conflicts() {
    let locked = DomainError::conflict(ConflictKind::RoundFinalized, "locked");
    let app: AppError = locked.into();
    assert_eq!(app.code().as_str(), "ROUND_FINALIZED");
    assert_eq!(app.status().as_u16(), 409);

    let unique = DomainError::conflict(ConflictKind::UniquePlayerName, "taken");
    let app: AppError = unique.into();
    assert_eq!(app.code().as_str(), "UNIQUE_PLAYER_NAME");

    let other = DomainError::conflict(ConflictKind::Other("Unique".into()), "generic");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Round, "no round");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "ROUND_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let nf = DomainError::not_found(NotFoundKind::Other("Record".into()), "gone");
    let app: AppError = nf.into();
    assert_eq!(app.code(), ErrorCode::NotFound);
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let corrupt = DomainError::infra(InfraErrorKind::DataCorruption, "bad pars json");
    let app: AppError = corrupt.into();
    assert_eq!(app.code(), ErrorCode::DataCorruption);
    assert_eq!(app.status().as_u16(), 500);
}
