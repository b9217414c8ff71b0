use fairway::db::txn::with_txn;
use fairway::domain::HoleEntry;
use fairway::error::AppError;
use fairway::errors::ErrorCode;
use fairway::repos::{hole_scores, players};
use fairway::services::round_lifecycle::{InitiateRound, RoundLifecycleService};
use fairway::services::rounds::{NewRound, RoundService};
use fairway::services::scoring::ScoringService;
use time::macros::date;

use crate::support::build_test_state;
use crate::support::factory::{
    card, create_test_course, create_test_player, create_test_tournament,
    create_unconfigured_course, enter_player,
};

#[tokio::test]
async fn nine_handicap_level_par_card_scores_45_points() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let tournament = create_test_tournament(txn).await?;
            let course = create_test_course(txn, Some(113.0)).await?;
            let player = create_test_player(txn, Some(9.0)).await?;
            enter_player(txn, tournament.id, player.id).await?;

            let rounds = RoundLifecycleService::new()
                .initiate(
                    txn,
                    InitiateRound {
                        tournament_id: tournament.id,
                        course_id: course.id,
                        sequence_number: 1,
                        player_ids: vec![Some(player.id)],
                    },
                )
                .await?;
            assert_eq!(rounds[0].player_playing_handicap, Some(9));

            let scored = ScoringService::new()
                .record_hole_scores(txn, rounds[0].id, &card(4))
                .await?;
            let r = &scored.round;

            assert_eq!(r.gross_front9, Some(36));
            assert_eq!(r.gross_back9, Some(36));
            assert_eq!(r.gross_total, Some(72));
            assert_eq!(r.nett_front9, Some(27));
            assert_eq!(r.nett_back9, Some(36));
            assert_eq!(r.nett_total, Some(63));
            assert_eq!(r.stableford_front9, Some(27));
            assert_eq!(r.stableford_back9, Some(18));
            assert_eq!(r.stableford_total, Some(45));
            assert_eq!(scored.hole_scores.len(), 18);
            assert_eq!(scored.hole_scores[0].stableford_points, Some(3));
            assert_eq!(scored.hole_scores[17].nett_score, Some(4));

            // scoring never touches the live handicap
            let player = players::require_player(txn, player.id).await?;
            assert_eq!(player.handicap, Some(9.0));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn resubmitting_a_card_is_idempotent() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let tournament = create_test_tournament(txn).await?;
            let course = create_test_course(txn, Some(113.0)).await?;
            let player = create_test_player(txn, Some(18.0)).await?;
            let rounds = RoundLifecycleService::new()
                .initiate(
                    txn,
                    InitiateRound {
                        tournament_id: tournament.id,
                        course_id: course.id,
                        sequence_number: 1,
                        player_ids: vec![Some(player.id)],
                    },
                )
                .await?;
            let round_id = rounds[0].id;
            let scoring = ScoringService::new();

            let first = scoring.record_hole_scores(txn, round_id, &card(5)).await?;
            let second = scoring.record_hole_scores(txn, round_id, &card(5)).await?;

            assert_eq!(first.round.stableford_total, second.round.stableford_total);
            assert_eq!(first.round.nett_total, second.round.nett_total);
            let first_ids: Vec<i64> = first.hole_scores.iter().map(|h| h.id).collect();
            let second_ids: Vec<i64> = second.hole_scores.iter().map(|h| h.id).collect();
            assert_eq!(first_ids, second_ids);
            assert_eq!(hole_scores::list_for_round(txn, round_id).await?.len(), 18);

            // a corrected card overwrites in place
            let third = scoring.record_hole_scores(txn, round_id, &card(4)).await?;
            assert_eq!(third.round.gross_total, Some(72));
            assert_eq!(hole_scores::list_for_round(txn, round_id).await?.len(), 18);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn finalized_round_rejects_scores() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let tournament = create_test_tournament(txn).await?;
            let course = create_test_course(txn, Some(113.0)).await?;
            let player = create_test_player(txn, Some(10.0)).await?;
            enter_player(txn, tournament.id, player.id).await?;
            let lifecycle = RoundLifecycleService::new();
            let rounds = lifecycle
                .initiate(
                    txn,
                    InitiateRound {
                        tournament_id: tournament.id,
                        course_id: course.id,
                        sequence_number: 1,
                        player_ids: vec![Some(player.id)],
                    },
                )
                .await?;
            let scoring = ScoringService::new();
            scoring.record_hole_scores(txn, rounds[0].id, &card(4)).await?;
            lifecycle.end_round(txn, tournament.id, 1).await?;

            let err = scoring
                .record_hole_scores(txn, rounds[0].id, &card(3))
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::RoundFinalized);
            assert_eq!(err.status().as_u16(), 409);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn card_validation_errors() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let tournament = create_test_tournament(txn).await?;
            let course = create_test_course(txn, Some(113.0)).await?;
            let player = create_test_player(txn, Some(10.0)).await?;
            let round = RoundService::new()
                .create_round(
                    txn,
                    NewRound {
                        tournament_id: tournament.id,
                        player_id: player.id,
                        course_id: course.id,
                        round_number: 1,
                        date_played: date!(2024 - 06 - 01),
                    },
                )
                .await?;
            let scoring = ScoringService::new();

            let short = &card(4)[..17];
            let err = scoring.record_hole_scores(txn, round.id, short).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::WrongScoreCount);

            let mut missing_gross = card(4);
            missing_gross[3].gross_score = None;
            let err = scoring
                .record_hole_scores(txn, round.id, &missing_gross)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidGrossScore);

            let mut off_course = card(4);
            off_course[0] = HoleEntry {
                hole_number: 19,
                gross_score: Some(4),
            };
            let err = scoring
                .record_hole_scores(txn, round.id, &off_course)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidHoleNumber);

            // nothing was written by the rejected cards
            assert!(hole_scores::list_for_round(txn, round.id).await?.is_empty());

            let err = scoring.record_hole_scores(txn, 9_999, &card(4)).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::RoundNotFound);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn unconfigured_course_is_incomplete_data() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let tournament = create_test_tournament(txn).await?;
            let course = create_unconfigured_course(txn).await?;
            let player = create_test_player(txn, None).await?;
            let round = RoundService::new()
                .create_round(
                    txn,
                    NewRound {
                        tournament_id: tournament.id,
                        player_id: player.id,
                        course_id: course.id,
                        round_number: 1,
                        date_played: date!(2024 - 06 - 01),
                    },
                )
                .await?;

            let err = ScoringService::new()
                .record_hole_scores(txn, round.id, &card(4))
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::IncompleteCourseData);
            assert_eq!(err.status().as_u16(), 400);
            Ok(())
        })
    })
    .await
}
