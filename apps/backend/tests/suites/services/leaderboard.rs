use fairway::db::txn::with_txn;
use fairway::error::AppError;
use fairway::errors::ErrorCode;
use fairway::services::leaderboard::LeaderboardService;
use fairway::services::round_lifecycle::{InitiateRound, RoundLifecycleService};
use fairway::services::scoring::ScoringService;

use crate::support::build_test_state;
use crate::support::factory::{card, create_test_course, create_test_player, create_test_tournament};

#[tokio::test]
async fn ties_share_a_position() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let tournament = create_test_tournament(txn).await?;
            let course = create_test_course(txn, Some(113.0)).await?;
            let mut ids = Vec::new();
            for _ in 0..5 {
                ids.push(create_test_player(txn, Some(0.0)).await?.id);
            }

            let rounds = RoundLifecycleService::new()
                .initiate(
                    txn,
                    InitiateRound {
                        tournament_id: tournament.id,
                        course_id: course.id,
                        sequence_number: 1,
                        player_ids: ids.iter().copied().map(Some).collect(),
                    },
                )
                .await?;

            // scratch players, so points follow gross directly; the fifth never scores
            let scoring = ScoringService::new();
            for (round, gross) in rounds.iter().zip([3, 4, 4, 5]) {
                scoring.record_hole_scores(txn, round.id, &card(gross)).await?;
            }

            let standings = LeaderboardService::new()
                .standings(txn, tournament.id)
                .await?;
            let table: Vec<(u32, i64, i32)> = standings
                .iter()
                .map(|s| (s.position, s.totals.player_id, s.totals.stableford))
                .collect();

            assert_eq!(table.len(), 4);
            assert_eq!(table[0], (1, ids[0], 54));
            assert_eq!((table[1].0, table[1].2), (2, 36));
            assert_eq!((table[2].0, table[2].2), (2, 36));
            assert_eq!(table[3], (4, ids[3], 18));
            assert!(standings.iter().all(|s| !s.totals.player_name.is_empty()));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn totals_accumulate_across_stages() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let tournament = create_test_tournament(txn).await?;
            let course = create_test_course(txn, Some(113.0)).await?;
            let player = create_test_player(txn, Some(0.0)).await?;
            let lifecycle = RoundLifecycleService::new();
            let scoring = ScoringService::new();

            for (stage, gross) in [(1, 4), (2, 5)] {
                let rounds = lifecycle
                    .initiate(
                        txn,
                        InitiateRound {
                            tournament_id: tournament.id,
                            course_id: course.id,
                            sequence_number: stage,
                            player_ids: vec![Some(player.id)],
                        },
                    )
                    .await?;
                scoring
                    .record_hole_scores(txn, rounds[0].id, &card(gross))
                    .await?;
            }
            // first stage finalized, second still open; both count
            lifecycle.end_round(txn, tournament.id, 1).await?;

            let standings = LeaderboardService::new()
                .standings(txn, tournament.id)
                .await?;
            assert_eq!(standings.len(), 1);
            let totals = &standings[0].totals;
            assert_eq!(totals.rounds_played, 2);
            assert_eq!(totals.gross, 72 + 90);
            assert_eq!(totals.nett, 72 + 90);
            assert_eq!(totals.stableford, 36 + 18);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn unknown_tournament_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let err = LeaderboardService::new()
                .standings(txn, 31_337)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::TournamentNotFound);
            Ok(())
        })
    })
    .await
}
