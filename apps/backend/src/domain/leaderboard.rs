//! Tournament standings from finished round totals.

/// Accumulated totals for one player across scored rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTotals {
    pub player_id: i64,
    pub player_name: String,
    pub rounds_played: u32,
    pub gross: i32,
    pub nett: i32,
    pub stableford: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// Shared on ties: 1, 2, 2, 4.
    pub position: u32,
    pub totals: PlayerTotals,
}

/// Order by Stableford (high first), then nett (low first), then name.
pub fn rank(mut totals: Vec<PlayerTotals>) -> Vec<Standing> {
    totals.sort_by(|a, b| {
        b.stableford
            .cmp(&a.stableford)
            .then(a.nett.cmp(&b.nett))
            .then_with(|| a.player_name.cmp(&b.player_name))
    });

    let mut standings: Vec<Standing> = Vec::with_capacity(totals.len());
    for (idx, t) in totals.into_iter().enumerate() {
        let position = match standings.last() {
            Some(prev) if tied(&prev.totals, &t) => prev.position,
            _ => idx as u32 + 1,
        };
        standings.push(Standing {
            position,
            totals: t,
        });
    }
    standings
}

fn tied(a: &PlayerTotals, b: &PlayerTotals) -> bool {
    a.stableford == b.stableford && a.nett == b.nett
}
