use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use fairway::infra::state::build_state;
use fairway::AppError;
use serde_json::json;

use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn malformed_json_is_bad_request() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let req = test::TestRequest::post()
        .uri("/api/players")
        .insert_header(ContentType::json())
        .set_payload(r#"{"name": "Unclosed"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem_details(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
    assert_eq!(problem.title, "Bad Request");
    Ok(())
}

#[actix_web::test]
async fn wrongly_typed_field_is_bad_request() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({ "name": 42 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem_details(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
    assert!(problem.detail.starts_with("Invalid JSON"));
    Ok(())
}

#[actix_web::test]
async fn empty_body_is_bad_request() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let req = test::TestRequest::post()
        .uri("/api/handicap_adjustments")
        .insert_header(ContentType::json())
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem_details(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
    assert_eq!(problem.detail, "Request body is required");
    Ok(())
}

#[actix_web::test]
async fn missing_database_is_503_with_retry_after() -> Result<(), AppError> {
    let app = create_test_app(build_state().build().await?).await;

    let req = test::TestRequest::get().uri("/api/players").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key("retry-after"));
    assert_problem_details(resp, StatusCode::SERVICE_UNAVAILABLE, "DB_UNAVAILABLE").await;
    Ok(())
}

#[actix_web::test]
async fn adjustment_conflict_is_409() -> Result<(), AppError> {
    let state = build_test_state().await?;
    crate::support::committed(&state, |txn| {
        Box::pin(async move { crate::support::factory::create_adjustment(txn, 36, 0.0).await })
    })
    .await?;
    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri("/api/handicap_adjustments")
        .set_json(json!({ "stableford_score": 36, "adjustment": -0.1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::CONFLICT, "ADJUSTMENT_EXISTS").await;
    Ok(())
}
