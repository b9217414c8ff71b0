use backend_test_support::unique_helpers::unique_str;
use fairway::adapters::players_sea::PlayerCreate;
use fairway::adapters::tournaments_sea::TournamentCreate;
use fairway::domain::{CourseLayout, HoleEntry};
use fairway::repos::courses::{self, Course, NewCourse};
use fairway::repos::players::{self, Player};
use fairway::repos::tournaments::{self, Tournament};
use fairway::repos::{adjustments, memberships};
use fairway::AppError;
use sea_orm::ConnectionTrait;

/// Par 4 on every hole, stroke index equal to the hole number.
pub fn flat_pars() -> Vec<i32> {
    vec![4; 18]
}

pub fn ordered_stroke_indices() -> Vec<i32> {
    (1..=18).collect()
}

/// Same gross on all 18 holes.
pub fn card(gross: i32) -> Vec<HoleEntry> {
    (1..=18)
        .map(|hole_number| HoleEntry {
            hole_number,
            gross_score: Some(gross),
        })
        .collect()
}

pub async fn create_test_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    handicap: Option<f64>,
) -> Result<Player, AppError> {
    let dto = PlayerCreate {
        name: unique_str("player"),
        handicap,
    };
    Ok(players::create_player(conn, dto).await?)
}

/// Fully configured course at the given slope.
pub async fn create_test_course<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    slope_rating: Option<f64>,
) -> Result<Course, AppError> {
    let layout = CourseLayout::new(flat_pars(), ordered_stroke_indices())?;
    Ok(courses::create_course(
        conn,
        NewCourse {
            name: unique_str("course"),
            country: Some("Scotland".to_string()),
            slope_rating,
            layout,
        },
    )
    .await?)
}

pub async fn create_unconfigured_course<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Course, AppError> {
    Ok(courses::create_course(
        conn,
        NewCourse {
            name: unique_str("course"),
            country: None,
            slope_rating: Some(113.0),
            layout: CourseLayout::default(),
        },
    )
    .await?)
}

pub async fn create_test_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Tournament, AppError> {
    Ok(tournaments::create_tournament(
        conn,
        TournamentCreate {
            name: unique_str("open"),
            date: None,
            location: Some("St Andrews".to_string()),
        },
    )
    .await?)
}

pub async fn enter_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    player_id: i64,
) -> Result<(), AppError> {
    memberships::add_player(conn, tournament_id, player_id).await?;
    Ok(())
}

pub async fn create_adjustment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stableford_score: i32,
    adjustment: f64,
) -> Result<(), AppError> {
    adjustments::create(conn, stableford_score, adjustment).await?;
    Ok(())
}
