use fairway::adapters::players_sea::{PlayerCreate, PlayerUpdate};
use fairway::db::txn::with_txn;
use fairway::error::AppError;
use fairway::errors::ErrorCode;
use fairway::repos::courses::CoursePatch;
use fairway::services::adjustments::AdjustmentService;
use fairway::services::courses::{CourseInput, CourseService};
use fairway::services::players::PlayerService;
use fairway::services::rounds::{NewRound, RoundService};
use time::macros::date;

use crate::support::build_test_state;
use crate::support::factory::{
    create_test_course, create_test_player, create_test_tournament, flat_pars,
    ordered_stroke_indices,
};

#[tokio::test]
async fn player_crud() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let service = PlayerService::new();
            let player = service
                .create(
                    txn,
                    PlayerCreate {
                        name: "Alice".to_string(),
                        handicap: Some(14.2),
                    },
                )
                .await?;
            assert_eq!(service.get(txn, player.id).await?.handicap, Some(14.2));

            let renamed = service
                .update(
                    txn,
                    player.id,
                    PlayerUpdate {
                        name: Some("Alice B".to_string()),
                        handicap: None,
                    },
                )
                .await?;
            assert_eq!(renamed.name, "Alice B");
            assert_eq!(renamed.handicap, Some(14.2));

            let cleared = service
                .update(
                    txn,
                    player.id,
                    PlayerUpdate {
                        name: None,
                        handicap: Some(None),
                    },
                )
                .await?;
            assert_eq!(cleared.handicap, None);

            let err = service
                .update(
                    txn,
                    player.id,
                    PlayerUpdate {
                        name: Some(String::new()),
                        handicap: None,
                    },
                )
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::MissingField);

            service.delete(txn, player.id).await?;
            let err = service.get(txn, player.id).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::PlayerNotFound);
            assert_eq!(err.status().as_u16(), 404);

            let err = service.delete(txn, player.id).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::PlayerNotFound);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn player_names_are_unique() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let service = PlayerService::new();
            let dto = PlayerCreate {
                name: "Bob".to_string(),
                handicap: None,
            };
            service.create(txn, dto.clone()).await?;
            let err = service.create(txn, dto).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::UniquePlayerName);
            assert_eq!(err.status().as_u16(), 409);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn course_layout_is_validated() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let service = CourseService::new();

            let mut short = flat_pars();
            short.pop();
            let err = service
                .create(
                    txn,
                    CourseInput {
                        name: "Short".to_string(),
                        hole_pars: short,
                        ..CourseInput::default()
                    },
                )
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidCourseLayout);

            let mut repeated = ordered_stroke_indices();
            repeated[17] = 1;
            let err = service
                .create(
                    txn,
                    CourseInput {
                        name: "Repeated".to_string(),
                        hole_stroke_indices: repeated,
                        ..CourseInput::default()
                    },
                )
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidCourseLayout);

            let err = service
                .create(
                    txn,
                    CourseInput {
                        name: "Flat".to_string(),
                        slope_rating: Some(0.0),
                        ..CourseInput::default()
                    },
                )
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidCourseLayout);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn unconfigured_course_lists_empty_holes_until_patched() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let service = CourseService::new();
            let course = service
                .create(
                    txn,
                    CourseInput {
                        name: "Muirfield".to_string(),
                        country: Some("Scotland".to_string()),
                        slope_rating: Some(132.0),
                        ..CourseInput::default()
                    },
                )
                .await?;

            let holes = service.holes(txn, course.id).await?;
            assert_eq!(holes.len(), 18);
            assert!(holes.iter().all(|h| h.par.is_none() && h.stroke_index.is_none()));

            // pars alone; stroke indices keep their stored (empty) value
            let patched = service
                .update(
                    txn,
                    course.id,
                    CoursePatch {
                        pars: Some(flat_pars()),
                        ..CoursePatch::default()
                    },
                )
                .await?;
            assert_eq!(patched.layout.pars().len(), 18);
            assert!(patched.layout.stroke_indices().is_empty());
            assert!(!patched.layout.is_complete());

            service
                .update(
                    txn,
                    course.id,
                    CoursePatch {
                        stroke_indices: Some(ordered_stroke_indices()),
                        ..CoursePatch::default()
                    },
                )
                .await?;
            let holes = service.holes(txn, course.id).await?;
            assert_eq!(holes[0].par, Some(4));
            assert_eq!(holes[17].stroke_index, Some(18));
            assert_eq!(service.get(txn, course.id).await?.slope_rating, Some(132.0));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn course_referenced_by_rounds_cannot_be_deleted() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let service = CourseService::new();
            let spare = create_test_course(txn, Some(113.0)).await?;
            service.delete(txn, spare.id).await?;
            let err = service.get(txn, spare.id).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::CourseNotFound);

            let course = create_test_course(txn, Some(113.0)).await?;
            let tournament = create_test_tournament(txn).await?;
            let player = create_test_player(txn, None).await?;
            RoundService::new()
                .create_round(
                    txn,
                    NewRound {
                        tournament_id: tournament.id,
                        player_id: player.id,
                        course_id: course.id,
                        round_number: 1,
                        date_played: date!(2024 - 07 - 14),
                    },
                )
                .await?;

            let err = service.delete(txn, course.id).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::ValidationError);
            assert_eq!(err.status().as_u16(), 400);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn adjustment_table_maintenance() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let service = AdjustmentService::new();
            service.create(txn, 40, -1.0).await?;
            service.create(txn, 30, 0.5).await?;

            let rows = service.list(txn).await?;
            let scores: Vec<i32> = rows.iter().map(|r| r.stableford_score).collect();
            assert_eq!(scores, vec![30, 40]);

            let err = service.create(txn, 40, -2.0).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::AdjustmentExists);

            let updated = service.update(txn, 40, -1.5).await?;
            assert_eq!(updated.adjustment, -1.5);

            let err = service.update(txn, 41, 1.0).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::AdjustmentNotFound);

            service.delete(txn, 30).await?;
            let err = service.delete(txn, 30).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::AdjustmentNotFound);

            let err = service.create(txn, 20, f64::NAN).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::ValidationError);
            Ok(())
        })
    })
    .await
}
