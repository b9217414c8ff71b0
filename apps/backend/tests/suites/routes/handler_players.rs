use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use fairway::AppError;
use serde_json::{json, Value};

use crate::support::factory::create_test_player;
use crate::support::{build_test_state, committed, create_test_app};

#[actix_web::test]
async fn create_returns_201_with_body() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({ "name": "Ada", "handicap": 7.4 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["handicap"], 7.4);
    assert!(body["id"].as_i64().is_some());
    Ok(())
}

#[actix_web::test]
async fn get_update_and_delete_existing_player() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let player = committed(&state, |txn| {
        Box::pin(async move { create_test_player(txn, Some(20.0)).await })
    })
    .await?;
    let app = create_test_app(state).await;
    let uri = format!("/api/players/{}", player.id);

    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["handicap"], 20.0);

    // null clears the handicap, name untouched
    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "handicap": null }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["handicap"].is_null());
    assert_eq!(body["name"], player.name.as_str());

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    Ok(())
}

#[actix_web::test]
async fn unknown_player_is_problem_404() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let req = test::TestRequest::get().uri("/api/players/4040").to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem_details(resp, StatusCode::NOT_FOUND, "PLAYER_NOT_FOUND").await;
    assert!(problem.detail.contains("4040"));
    Ok(())
}

#[actix_web::test]
async fn duplicate_name_is_problem_409() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let player = committed(&state, |txn| {
        Box::pin(async move { create_test_player(txn, None).await })
    })
    .await?;
    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({ "name": player.name }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::CONFLICT, "UNIQUE_PLAYER_NAME").await;
    Ok(())
}

#[actix_web::test]
async fn list_returns_players_in_id_order() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let (a, b) = committed(&state, |txn| {
        Box::pin(async move {
            let a = create_test_player(txn, None).await?;
            let b = create_test_player(txn, Some(1.0)).await?;
            Ok((a.id, b.id))
        })
    })
    .await?;
    let app = create_test_app(state).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/players").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<Value> = test::read_body_json(resp).await;
    let ids: Vec<i64> = body.iter().filter_map(|p| p["id"].as_i64()).collect();
    assert_eq!(ids, vec![a, b]);
    Ok(())
}
