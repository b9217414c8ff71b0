//! DTOs for players_sea adapter.

/// DTO for creating a player.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub name: String,
    pub handicap: Option<f64>,
}

impl PlayerCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handicap: None,
        }
    }

    pub fn with_handicap(mut self, handicap: f64) -> Self {
        self.handicap = Some(handicap);
        self
    }
}

/// Partial update; `None` leaves a column untouched.
#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    /// Three-state: None = no change, Some(None) = clear, Some(Some(x)) = set.
    pub handicap: Option<Option<f64>>,
}
