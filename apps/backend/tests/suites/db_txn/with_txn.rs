use backend_test_support::unique_helpers::unique_str;
use fairway::adapters::players_sea::PlayerCreate;
use fairway::db::require_db;
use fairway::db::txn::with_txn;
use fairway::db::txn_policy::{current, TxnPolicy};
use fairway::error::AppError;
use fairway::errors::ErrorCode;
use fairway::infra::state::build_state;
use fairway::repos::players;
use fairway::state::app_state::AppState;
use tracing::debug;

use crate::support::{build_test_state, committed};

async fn player_named(state: &AppState, name: &str) -> Result<bool, AppError> {
    let db = require_db(state)?;
    Ok(players::list(db).await?.iter().any(|p| p.name == name))
}

#[tokio::test]
async fn error_in_closure_rolls_back() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let name = unique_str("rollback");

    let result: Result<(), AppError> = with_txn(&state, |txn| {
        let name = name.clone();
        Box::pin(async move {
            players::create_player(
                txn,
                PlayerCreate {
                    name,
                    handicap: None,
                },
            )
            .await?;
            debug!("inserted player inside txn before error");
            Err(AppError::internal("forced failure"))
        })
    })
    .await;

    let err = result.unwrap_err();
    assert_eq!(err.code(), ErrorCode::Internal);
    assert!(!player_named(&state, &name).await?);
    Ok(())
}

#[tokio::test]
async fn ok_follows_the_binary_policy() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let name = unique_str("policy");

    let id = with_txn(&state, |txn| {
        let name = name.clone();
        Box::pin(async move {
            let player = players::create_player(
                txn,
                PlayerCreate {
                    name,
                    handicap: Some(3.0),
                },
            )
            .await?;
            Ok(player.id)
        })
    })
    .await?;
    assert!(id > 0);

    let visible = player_named(&state, &name).await?;
    match current() {
        TxnPolicy::RollbackOnOk => assert!(!visible, "row should not persist after rollback-on-ok"),
        TxnPolicy::CommitOnOk => assert!(visible),
    }
    Ok(())
}

#[tokio::test]
async fn committed_helper_always_persists() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let name = unique_str("fixture");

    committed(&state, |txn| {
        let name = name.clone();
        Box::pin(async move {
            players::create_player(
                txn,
                PlayerCreate {
                    name,
                    handicap: None,
                },
            )
            .await?;
            Ok(())
        })
    })
    .await?;

    assert!(player_named(&state, &name).await?);
    Ok(())
}

#[tokio::test]
async fn missing_database_is_unavailable() -> Result<(), AppError> {
    let state = build_state().build().await?;

    let err = with_txn(&state, |_txn| Box::pin(async move { Ok(()) }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::DbUnavailable);
    assert_eq!(err.status().as_u16(), 503);
    Ok(())
}
