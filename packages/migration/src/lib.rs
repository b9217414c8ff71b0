//! Schema migrations for the Fairway database.

pub use sea_orm_migration::prelude::*;
pub use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseConnection};

mod m20251016_000001_golf_schema;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251016_000001_golf_schema::Migration)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationCommand {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

/// Names of applied migrations, oldest first. Empty before the first run,
/// when the bookkeeping table does not exist yet.
async fn applied(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.iter().map(|m| m.name().to_string()).collect()),
        Err(DbErr::Exec(_)) => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// Run `command` on an open connection. Used by the backend at startup and
/// by the migration CLI.
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let defined = Migrator::migrations().len();
    let before = applied(db).await?.len();
    tracing::info!(?command, ?backend, defined, applied = before, "migration starting");

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Fresh => Migrator::fresh(db).await,
        MigrationCommand::Reset => Migrator::reset(db).await,
        MigrationCommand::Refresh => Migrator::refresh(db).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    if let Err(e) = result {
        tracing::error!(?command, ?backend, error = %e, "migration failed");
        return Err(e);
    }

    let after = applied(db).await?.len();
    tracing::info!(?command, applied = after, "migration finished");
    Ok(())
}

/// Name of the newest applied migration, if any.
pub async fn get_latest_migration_version(
    db: &DatabaseConnection,
) -> Result<Option<String>, DbErr> {
    Ok(applied(db).await?.pop())
}
