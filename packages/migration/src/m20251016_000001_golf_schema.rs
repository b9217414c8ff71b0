use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Players {
    Table,
    Id,
    Name,
    Handicap,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    Name,
    Country,
    SlopeRating,
    HolePars,
    HoleStrokeIndices,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Tournaments {
    Table,
    Id,
    Name,
    Date,
    Location,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum TournamentPlayers {
    Table,
    Id,
    TournamentId,
    PlayerId,
}

#[derive(Iden)]
enum TournamentCourses {
    Table,
    Id,
    TournamentId,
    CourseId,
    SequenceNumber,
}

#[derive(Iden)]
enum Rounds {
    Table,
    Id,
    TournamentId,
    PlayerId,
    CourseId,
    RoundNumber,
    DatePlayed,
    PlayerHandicapIndex,
    PlayerPlayingHandicap,
    GrossFront9,
    GrossBack9,
    GrossTotal,
    NettFront9,
    NettBack9,
    NettTotal,
    StablefordFront9,
    StablefordBack9,
    StablefordTotal,
    IsFinalized,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum HoleScores {
    Table,
    Id,
    RoundId,
    HoleNumber,
    GrossScore,
    NettScore,
    StablefordPoints,
}

#[derive(Iden)]
enum HandicapAdjustments {
    Table,
    StablefordScore,
    Adjustment,
}

fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

fn ts_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(id_col(Players::Id))
                    .col(ColumnDef::new(Players::Name).string().not_null())
                    .col(ColumnDef::new(Players::Handicap).double().null())
                    .col(ts_col(Players::CreatedAt))
                    .col(ts_col(Players::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_players_name")
                    .table(Players::Table)
                    .col(Players::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // courses: per-hole arrays are JSON text, "[]" until configured
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(id_col(Courses::Id))
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::Country).string().null())
                    .col(ColumnDef::new(Courses::SlopeRating).double().null())
                    .col(
                        ColumnDef::new(Courses::HolePars)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .col(
                        ColumnDef::new(Courses::HoleStrokeIndices)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .col(ts_col(Courses::CreatedAt))
                    .col(ts_col(Courses::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_courses_name")
                    .table(Courses::Table)
                    .col(Courses::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // tournaments
        manager
            .create_table(
                Table::create()
                    .table(Tournaments::Table)
                    .if_not_exists()
                    .col(id_col(Tournaments::Id))
                    .col(ColumnDef::new(Tournaments::Name).string().not_null())
                    .col(ColumnDef::new(Tournaments::Date).date().null())
                    .col(ColumnDef::new(Tournaments::Location).string().null())
                    .col(ts_col(Tournaments::CreatedAt))
                    .col(ts_col(Tournaments::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_tournaments_name")
                    .table(Tournaments::Table)
                    .col(Tournaments::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // tournament_players
        manager
            .create_table(
                Table::create()
                    .table(TournamentPlayers::Table)
                    .if_not_exists()
                    .col(id_col(TournamentPlayers::Id))
                    .col(
                        ColumnDef::new(TournamentPlayers::TournamentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TournamentPlayers::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tournament_players_tournament_id")
                            .from(TournamentPlayers::Table, TournamentPlayers::TournamentId)
                            .to(Tournaments::Table, Tournaments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tournament_players_player_id")
                            .from(TournamentPlayers::Table, TournamentPlayers::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_tournament_players_pair")
                    .table(TournamentPlayers::Table)
                    .col(TournamentPlayers::TournamentId)
                    .col(TournamentPlayers::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // tournament_courses
        manager
            .create_table(
                Table::create()
                    .table(TournamentCourses::Table)
                    .if_not_exists()
                    .col(id_col(TournamentCourses::Id))
                    .col(
                        ColumnDef::new(TournamentCourses::TournamentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TournamentCourses::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TournamentCourses::SequenceNumber)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tournament_courses_tournament_id")
                            .from(TournamentCourses::Table, TournamentCourses::TournamentId)
                            .to(Tournaments::Table, Tournaments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tournament_courses_course_id")
                            .from(TournamentCourses::Table, TournamentCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_tournament_courses_sequence")
                    .table(TournamentCourses::Table)
                    .col(TournamentCourses::TournamentId)
                    .col(TournamentCourses::CourseId)
                    .col(TournamentCourses::SequenceNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // rounds
        let mut rounds = Table::create();
        rounds
            .table(Rounds::Table)
            .if_not_exists()
            .col(id_col(Rounds::Id))
            .col(ColumnDef::new(Rounds::TournamentId).big_integer().not_null())
            .col(ColumnDef::new(Rounds::PlayerId).big_integer().not_null())
            .col(ColumnDef::new(Rounds::CourseId).big_integer().not_null())
            .col(ColumnDef::new(Rounds::RoundNumber).integer().not_null())
            .col(ColumnDef::new(Rounds::DatePlayed).date().not_null())
            .col(ColumnDef::new(Rounds::PlayerHandicapIndex).double().null())
            .col(ColumnDef::new(Rounds::PlayerPlayingHandicap).integer().null());
        for summary in [
            Rounds::GrossFront9,
            Rounds::GrossBack9,
            Rounds::GrossTotal,
            Rounds::NettFront9,
            Rounds::NettBack9,
            Rounds::NettTotal,
            Rounds::StablefordFront9,
            Rounds::StablefordBack9,
            Rounds::StablefordTotal,
        ] {
            rounds.col(ColumnDef::new(summary).integer().null());
        }
        rounds
            .col(
                ColumnDef::new(Rounds::IsFinalized)
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .col(ts_col(Rounds::CreatedAt))
            .col(ts_col(Rounds::UpdatedAt))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_rounds_tournament_id")
                    .from(Rounds::Table, Rounds::TournamentId)
                    .to(Tournaments::Table, Tournaments::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_rounds_player_id")
                    .from(Rounds::Table, Rounds::PlayerId)
                    .to(Players::Table, Players::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_rounds_course_id")
                    .from(Rounds::Table, Rounds::CourseId)
                    .to(Courses::Table, Courses::Id)
                    .on_delete(ForeignKeyAction::Restrict),
            );
        manager.create_table(rounds.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_rounds_tournament_round")
                    .table(Rounds::Table)
                    .col(Rounds::TournamentId)
                    .col(Rounds::RoundNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_rounds_player_id")
                    .table(Rounds::Table)
                    .col(Rounds::PlayerId)
                    .to_owned(),
            )
            .await?;

        // hole_scores
        manager
            .create_table(
                Table::create()
                    .table(HoleScores::Table)
                    .if_not_exists()
                    .col(id_col(HoleScores::Id))
                    .col(ColumnDef::new(HoleScores::RoundId).big_integer().not_null())
                    .col(ColumnDef::new(HoleScores::HoleNumber).integer().not_null())
                    .col(ColumnDef::new(HoleScores::GrossScore).integer().not_null())
                    .col(ColumnDef::new(HoleScores::NettScore).integer().null())
                    .col(ColumnDef::new(HoleScores::StablefordPoints).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hole_scores_round_id")
                            .from(HoleScores::Table, HoleScores::RoundId)
                            .to(Rounds::Table, Rounds::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_hole_scores_round_hole")
                    .table(HoleScores::Table)
                    .col(HoleScores::RoundId)
                    .col(HoleScores::HoleNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // handicap_adjustments: keyed by the Stableford total itself
        manager
            .create_table(
                Table::create()
                    .table(HandicapAdjustments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HandicapAdjustments::StablefordScore)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(HandicapAdjustments::Adjustment)
                            .double()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // reverse dependency order; indexes go with their tables
        manager
            .drop_table(Table::drop().table(HandicapAdjustments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HoleScores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rounds::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TournamentCourses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TournamentPlayers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tournaments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;
        Ok(())
    }
}
