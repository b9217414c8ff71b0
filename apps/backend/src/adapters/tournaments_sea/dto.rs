//! DTOs for tournaments_sea adapter.

use time::Date;

#[derive(Debug, Clone)]
pub struct TournamentCreate {
    pub name: String,
    pub date: Option<Date>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TournamentUpdate {
    pub name: Option<String>,
    pub date: Option<Option<Date>>,
    pub location: Option<Option<String>>,
}
