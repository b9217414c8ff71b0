pub mod courses;
pub mod handicap_adjustments;
pub mod hole_scores;
pub mod players;
pub mod rounds;
pub mod tournament_courses;
pub mod tournament_players;
pub mod tournaments;

pub use courses::Entity as Courses;
pub use courses::Model as Course;
pub use handicap_adjustments::Entity as HandicapAdjustments;
pub use handicap_adjustments::Model as HandicapAdjustment;
pub use hole_scores::Entity as HoleScores;
pub use hole_scores::Model as HoleScore;
pub use players::Entity as Players;
pub use players::Model as Player;
pub use rounds::Entity as Rounds;
pub use rounds::Model as Round;
pub use tournament_courses::Entity as TournamentCourses;
pub use tournament_courses::Model as TournamentCourse;
pub use tournament_players::Entity as TournamentPlayers;
pub use tournament_players::Model as TournamentPlayer;
pub use tournaments::Entity as Tournaments;
pub use tournaments::Model as Tournament;
