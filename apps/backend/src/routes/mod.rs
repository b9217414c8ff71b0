use actix_web::web;
use time::macros::format_description;
use time::Date;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod adjustments;
pub mod courses;
pub mod health;
pub mod players;
pub mod rounds;
pub mod tournaments;

// Calendar dates travel as `YYYY-MM-DD`.
time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

pub(crate) fn parse_date(raw: &str) -> Result<Date, AppError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).map_err(|_| {
        AppError::bad_request(
            ErrorCode::BadRequest,
            format!("Invalid date '{raw}', expected YYYY-MM-DD"),
        )
    })
}

/// Register every route plus problem-details handlers for malformed path
/// segments and query strings. Used by `main.rs` and the route tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, format!("Invalid path parameter: {err}")).into()
    }));
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, format!("Invalid query string: {err}")).into()
    }));

    cfg.configure(health::configure_routes);

    cfg.service(
        web::scope("/api")
            .service(web::scope("/players").configure(players::configure_routes))
            .service(web::scope("/courses").configure(courses::configure_routes))
            .service(web::scope("/tournaments").configure(tournaments::configure_routes))
            .service(web::scope("/rounds").configure(rounds::configure_routes))
            .service(
                web::scope("/handicap_adjustments").configure(adjustments::configure_routes),
            ),
    );
}
