use actix_web::http::StatusCode;
use actix_web::test;
use fairway::infra::state::build_state;
use fairway::AppError;
use serde_json::Value;

use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn health_reports_db_and_migrations() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert!(body.get("db_error").is_none());
    assert!(body["migrations"]
        .as_str()
        .is_some_and(|m| m.starts_with("m2025")));
    assert!(body["app_version"].is_string());
    Ok(())
}

#[actix_web::test]
async fn health_without_database_still_answers() -> Result<(), AppError> {
    let app = create_test_app(build_state().build().await?).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["db"], "error");
    assert_eq!(body["migrations"], "unknown");
    assert_eq!(body["db_error"], "Database unavailable");
    Ok(())
}
