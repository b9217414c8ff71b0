use fairway::adapters::memberships_sea::{self, CourseSlot};
use fairway::db::txn::with_txn;
use fairway::error::AppError;

use crate::support::build_test_state;
use crate::support::factory::{create_test_course, create_test_player, create_test_tournament};

#[tokio::test]
async fn add_player_ignores_existing_pair() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let tournament = create_test_tournament(txn).await?;
            let player = create_test_player(txn, None).await?;

            assert!(memberships_sea::add_player(txn, tournament.id, player.id).await?);
            assert!(!memberships_sea::add_player(txn, tournament.id, player.id).await?);
            assert_eq!(
                memberships_sea::player_ids(txn, tournament.id).await?,
                vec![player.id]
            );

            assert_eq!(memberships_sea::remove_players(txn, tournament.id, &[]).await?, 0);
            assert_eq!(
                memberships_sea::remove_players(txn, tournament.id, &[player.id]).await?,
                1
            );
            assert!(memberships_sea::player_ids(txn, tournament.id).await?.is_empty());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn course_slots_are_unique_per_sequence() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let tournament = create_test_tournament(txn).await?;
            let course = create_test_course(txn, Some(121.0)).await?;
            let first = CourseSlot {
                course_id: course.id,
                sequence_number: 2,
            };
            let second = CourseSlot {
                course_id: course.id,
                sequence_number: 1,
            };

            assert!(memberships_sea::add_course(txn, tournament.id, first).await?);
            assert!(!memberships_sea::add_course(txn, tournament.id, first).await?);
            assert!(memberships_sea::add_course(txn, tournament.id, second).await?);

            let slots = memberships_sea::course_slots(txn, tournament.id).await?;
            let order: Vec<i32> = slots.iter().map(|s| s.sequence_number).collect();
            assert_eq!(order, vec![1, 2]);

            assert_eq!(memberships_sea::remove_course(txn, tournament.id, first).await?, 1);
            assert_eq!(memberships_sea::remove_course(txn, tournament.id, first).await?, 0);
            Ok(())
        })
    })
    .await
}
