//! Tournament service: CRUD plus the player and course memberships.

use std::collections::{HashMap, HashSet};

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::{debug, info};

use crate::adapters::tournaments_sea::{TournamentCreate, TournamentUpdate};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::courses::{self, Course};
use crate::repos::memberships::{self, CourseSlot};
use crate::repos::players::{self, Player};
use crate::repos::tournaments::{self, Tournament};

/// A course at one stage of a tournament.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledCourse {
    pub sequence_number: i32,
    pub course: Course,
}

/// A tournament with its entrants and schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentDetail {
    pub tournament: Tournament,
    pub players: Vec<Player>,
    /// Ordered by sequence number.
    pub courses: Vec<ScheduledCourse>,
}

fn require_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation(
            ValidationKind::MissingField,
            "Tournament name is required",
        ));
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct TournamentService;

impl TournamentService {
    pub fn new() -> Self {
        Self
    }

    pub async fn create(
        &self,
        txn: &DatabaseTransaction,
        dto: TournamentCreate,
    ) -> Result<Tournament, AppError> {
        require_name(&dto.name)?;
        let tournament = tournaments::create_tournament(txn, dto).await?;
        info!(tournament_id = tournament.id, "Tournament created");
        Ok(tournament)
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tournament_id: i64,
    ) -> Result<Tournament, AppError> {
        Ok(tournaments::require_tournament(conn, tournament_id).await?)
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Tournament>, AppError> {
        Ok(tournaments::list(conn).await?)
    }

    pub async fn update(
        &self,
        txn: &DatabaseTransaction,
        tournament_id: i64,
        dto: TournamentUpdate,
    ) -> Result<Tournament, AppError> {
        if let Some(name) = &dto.name {
            require_name(name)?;
        }
        Ok(tournaments::update_tournament(txn, tournament_id, dto).await?)
    }

    /// Cascades to memberships and rounds.
    pub async fn delete(
        &self,
        txn: &DatabaseTransaction,
        tournament_id: i64,
    ) -> Result<(), AppError> {
        tournaments::delete_tournament(txn, tournament_id).await?;
        info!(tournament_id, "Tournament deleted");
        Ok(())
    }

    pub async fn detail<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tournament_id: i64,
    ) -> Result<TournamentDetail, AppError> {
        let tournament = tournaments::require_tournament(conn, tournament_id).await?;
        let players = self.players(conn, tournament_id).await?;
        let courses = self.courses(conn, tournament_id).await?;
        Ok(TournamentDetail {
            tournament,
            players,
            courses,
        })
    }

    pub async fn players<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tournament_id: i64,
    ) -> Result<Vec<Player>, AppError> {
        tournaments::require_tournament(conn, tournament_id).await?;
        let ids = memberships::player_ids(conn, tournament_id).await?;
        Ok(players::find_by_ids(conn, &ids).await?)
    }

    /// Enter players. Unknown ids are skipped and existing entrants ignored.
    pub async fn add_players(
        &self,
        txn: &DatabaseTransaction,
        tournament_id: i64,
        player_ids: &[i64],
    ) -> Result<TournamentDetail, AppError> {
        tournaments::require_tournament(txn, tournament_id).await?;
        let known: HashSet<i64> = players::find_by_ids(txn, player_ids)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();

        let mut added = 0usize;
        for &player_id in player_ids {
            if !known.contains(&player_id) {
                debug!(tournament_id, player_id, "Skipping unknown player");
                continue;
            }
            if memberships::add_player(txn, tournament_id, player_id).await? {
                added += 1;
            }
        }
        info!(tournament_id, added, "Players entered");
        self.detail(txn, tournament_id).await
    }

    pub async fn remove_players(
        &self,
        txn: &DatabaseTransaction,
        tournament_id: i64,
        player_ids: &[i64],
    ) -> Result<TournamentDetail, AppError> {
        tournaments::require_tournament(txn, tournament_id).await?;
        let removed = memberships::remove_players(txn, tournament_id, player_ids).await?;
        info!(tournament_id, removed, "Players withdrawn");
        self.detail(txn, tournament_id).await
    }

    pub async fn courses<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tournament_id: i64,
    ) -> Result<Vec<ScheduledCourse>, AppError> {
        tournaments::require_tournament(conn, tournament_id).await?;
        let slots = memberships::course_slots(conn, tournament_id).await?;
        let ids: Vec<i64> = slots.iter().map(|s| s.course_id).collect();
        let by_id: HashMap<i64, Course> = courses::find_by_ids(conn, &ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(slots
            .into_iter()
            .filter_map(|slot| {
                by_id.get(&slot.course_id).map(|course| ScheduledCourse {
                    sequence_number: slot.sequence_number,
                    course: course.clone(),
                })
            })
            .collect())
    }

    /// Schedule courses. Unknown course ids are skipped; an identical
    /// (course, sequence) slot is left as is.
    pub async fn add_courses(
        &self,
        txn: &DatabaseTransaction,
        tournament_id: i64,
        slots: &[CourseSlot],
    ) -> Result<TournamentDetail, AppError> {
        tournaments::require_tournament(txn, tournament_id).await?;
        let ids: Vec<i64> = slots.iter().map(|s| s.course_id).collect();
        let known: HashSet<i64> = courses::find_by_ids(txn, &ids)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();

        let mut added = 0usize;
        for &slot in slots {
            if !known.contains(&slot.course_id) {
                debug!(
                    tournament_id,
                    course_id = slot.course_id,
                    "Skipping unknown course"
                );
                continue;
            }
            if memberships::add_course(txn, tournament_id, slot).await? {
                added += 1;
            }
        }
        info!(tournament_id, added, "Courses scheduled");
        self.detail(txn, tournament_id).await
    }

    pub async fn remove_courses(
        &self,
        txn: &DatabaseTransaction,
        tournament_id: i64,
        slots: &[CourseSlot],
    ) -> Result<TournamentDetail, AppError> {
        tournaments::require_tournament(txn, tournament_id).await?;
        let mut removed = 0u64;
        for &slot in slots {
            removed += memberships::remove_course(txn, tournament_id, slot).await?;
        }
        info!(tournament_id, removed, "Courses unscheduled");
        self.detail(txn, tournament_id).await
    }
}
