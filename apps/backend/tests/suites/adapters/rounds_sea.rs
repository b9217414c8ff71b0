use fairway::adapters::rounds_sea::{self, RoundCreate, RoundFilter, RoundTotals};
use fairway::db::txn::with_txn;
use fairway::error::AppError;
use fairway::errors::ErrorCode;
use fairway::repos::rounds;
use time::macros::date;

use crate::support::build_test_state;
use crate::support::factory::{create_test_course, create_test_player, create_test_tournament};

fn new_round(tournament_id: i64, player_id: i64, course_id: i64, round_number: i32) -> RoundCreate {
    RoundCreate {
        tournament_id,
        player_id,
        course_id,
        round_number,
        date_played: date!(2024 - 05 - 11),
        player_handicap_index: Some(8.3),
        player_playing_handicap: Some(8),
    }
}

#[tokio::test]
async fn create_round_starts_open_with_null_totals() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let tournament = create_test_tournament(txn).await?;
            let course = create_test_course(txn, Some(113.0)).await?;
            let player = create_test_player(txn, Some(8.3)).await?;

            let model = rounds_sea::create_round(txn, new_round(tournament.id, player.id, course.id, 1)).await?;
            assert!(!model.is_finalized);
            assert_eq!(model.gross_total, None);
            assert_eq!(model.stableford_total, None);
            assert_eq!(model.player_handicap_index, Some(8.3));
            assert_eq!(model.date_played, date!(2024 - 05 - 11));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn update_totals_writes_all_nine_columns() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let tournament = create_test_tournament(txn).await?;
            let course = create_test_course(txn, Some(113.0)).await?;
            let player = create_test_player(txn, None).await?;
            let model = rounds_sea::create_round(txn, new_round(tournament.id, player.id, course.id, 1)).await?;

            let totals = RoundTotals {
                gross_front9: 40,
                gross_back9: 42,
                gross_total: 82,
                nett_front9: 36,
                nett_back9: 38,
                nett_total: 74,
                stableford_front9: 16,
                stableford_back9: 15,
                stableford_total: 31,
            };
            let updated = rounds_sea::update_totals(txn, model.id, totals).await?;
            assert_eq!(updated.gross_total, Some(82));
            assert_eq!(updated.nett_back9, Some(38));
            assert_eq!(updated.stableford_total, Some(31));
            assert!(updated.updated_at >= model.updated_at);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn finalize_open_is_guarded() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let tournament = create_test_tournament(txn).await?;
            let course = create_test_course(txn, Some(113.0)).await?;
            let player = create_test_player(txn, None).await?;
            let model = rounds_sea::create_round(txn, new_round(tournament.id, player.id, course.id, 1)).await?;

            rounds::finalize_open(txn, model.id).await?;
            assert!(rounds::require_round(txn, model.id).await?.is_finalized);

            // a second finalize models the losing side of a race
            let err: AppError = rounds::finalize_open(txn, model.id).await.unwrap_err().into();
            assert_eq!(err.code(), ErrorCode::RoundAlreadyFinalized);
            assert_eq!(err.status().as_u16(), 409);

            let err: AppError = rounds::finalize_open(txn, 8_888).await.unwrap_err().into();
            assert_eq!(err.status().as_u16(), 404);

            rounds::reopen(txn, model.id).await?;
            assert!(!rounds::require_round(txn, model.id).await?.is_finalized);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn list_filtered_combines_filters() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let tournament = create_test_tournament(txn).await?;
            let other = create_test_tournament(txn).await?;
            let course = create_test_course(txn, Some(113.0)).await?;
            let a = create_test_player(txn, None).await?;
            let b = create_test_player(txn, None).await?;
            let c = create_test_player(txn, None).await?;

            for (t, p, n) in [
                (tournament.id, a.id, 1),
                (tournament.id, b.id, 1),
                (tournament.id, a.id, 2),
                (tournament.id, c.id, 1),
                (other.id, a.id, 1),
            ] {
                rounds_sea::create_round(txn, new_round(t, p, course.id, n)).await?;
            }

            let stage_one = rounds_sea::find_by_tournament_and_number(txn, tournament.id, 1).await?;
            assert_eq!(stage_one.len(), 3);

            let picked = rounds_sea::list_filtered(
                txn,
                RoundFilter {
                    tournament_id: Some(tournament.id),
                    player_ids: Some(vec![a.id, b.id]),
                    ..RoundFilter::default()
                },
            )
            .await?;
            assert_eq!(picked.len(), 3);
            assert!(picked.iter().all(|r| r.player_id != c.id));

            let everything = rounds_sea::list_filtered(txn, RoundFilter::default()).await?;
            assert_eq!(everything.len(), 5);
            Ok(())
        })
    })
    .await
}
