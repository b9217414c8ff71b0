use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use fairway::AppError;
use uuid::Uuid;

use crate::support::{build_test_state, create_test_app};

fn request_id(resp: &actix_web::dev::ServiceResponse) -> Option<String> {
    resp.headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[actix_web::test]
async fn every_response_carries_a_request_id() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let first = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    let second = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    let a = request_id(&first).unwrap_or_default();
    let b = request_id(&second).unwrap_or_default();
    assert!(Uuid::parse_str(&a).is_ok());
    assert!(Uuid::parse_str(&b).is_ok());
    assert_ne!(a, b);
    Ok(())
}

#[actix_web::test]
async fn error_trace_id_matches_request_id() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/rounds/123").to_request(),
    )
    .await;
    let header = request_id(&resp).unwrap_or_default();
    let problem = assert_problem_details(resp, StatusCode::NOT_FOUND, "ROUND_NOT_FOUND").await;
    assert_eq!(problem.trace_id, header);
    Ok(())
}
