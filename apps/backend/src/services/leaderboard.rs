//! Tournament leaderboard over scored rounds.

use std::collections::BTreeMap;

use sea_orm::ConnectionTrait;

use crate::domain::leaderboard::{rank, PlayerTotals, Standing};
use crate::error::AppError;
use crate::repos::rounds::{self, RoundFilter};
use crate::repos::{players, tournaments};

#[derive(Debug, Default)]
pub struct LeaderboardService;

impl LeaderboardService {
    pub fn new() -> Self {
        Self
    }

    /// Standings over every round with a Stableford total, open or finalized.
    pub async fn standings<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tournament_id: i64,
    ) -> Result<Vec<Standing>, AppError> {
        tournaments::require_tournament(conn, tournament_id).await?;
        let scored: Vec<_> = rounds::list(
            conn,
            RoundFilter {
                tournament_id: Some(tournament_id),
                ..RoundFilter::default()
            },
        )
        .await?
        .into_iter()
        .filter(|r| r.has_scores())
        .collect();

        let mut by_player: BTreeMap<i64, PlayerTotals> = BTreeMap::new();
        for round in &scored {
            let entry = by_player
                .entry(round.player_id)
                .or_insert_with(|| PlayerTotals {
                    player_id: round.player_id,
                    player_name: String::new(),
                    rounds_played: 0,
                    gross: 0,
                    nett: 0,
                    stableford: 0,
                });
            entry.rounds_played += 1;
            entry.gross += round.gross_total.unwrap_or_default();
            entry.nett += round.nett_total.unwrap_or_default();
            entry.stableford += round.stableford_total.unwrap_or_default();
        }

        let ids: Vec<i64> = by_player.keys().copied().collect();
        for player in players::find_by_ids(conn, &ids).await? {
            if let Some(totals) = by_player.get_mut(&player.id) {
                totals.player_name = player.name;
            }
        }

        Ok(rank(by_player.into_values().collect()))
    }
}
