use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Which database the process talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production Postgres
    Prod,
    /// Test Postgres - enforces the `_test` name suffix
    Test,
    /// SQLite file at `FAIRWAY_SQLITE_FILE`
    SqliteFile,
    /// Private in-memory SQLite; one per connection pool
    InMemory,
}

impl DbProfile {
    /// Read `FAIRWAY_DB`, defaulting to `Prod`.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("FAIRWAY_DB") {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(DbProfile::Prod),
        }
    }

    pub fn is_sqlite(&self) -> bool {
        matches!(self, DbProfile::SqliteFile | DbProfile::InMemory)
    }
}

impl FromStr for DbProfile {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prod" | "postgres" => Ok(DbProfile::Prod),
            "test" => Ok(DbProfile::Test),
            "sqlite-file" | "sqlite" => Ok(DbProfile::SqliteFile),
            "sqlite-memory" | "memory" => Ok(DbProfile::InMemory),
            other => Err(AppError::config(format!(
                "Unknown FAIRWAY_DB value '{other}' (expected prod | test | sqlite-file | sqlite-memory)"
            ))),
        }
    }
}

/// Database owner enum for different access levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

/// Builds a database URL from environment variables based on profile and owner
pub fn db_url(profile: DbProfile, owner: DbOwner) -> Result<String, AppError> {
    match profile {
        DbProfile::InMemory => Ok("sqlite::memory:".to_string()),
        DbProfile::SqliteFile => {
            let path =
                env::var("FAIRWAY_SQLITE_FILE").unwrap_or_else(|_| "fairway.db".to_string());
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbProfile::Prod | DbProfile::Test => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = db_name(profile)?;
            let (username, password) = credentials(owner)?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
    }
}

fn db_name(profile: DbProfile) -> Result<String, AppError> {
    if profile == DbProfile::Test {
        let db_name = must_var("TEST_DB")?;
        if !db_name.ends_with("_test") {
            return Err(AppError::config(format!(
                "Test profile requires database name to end with '_test', but got: '{db_name}'"
            )));
        }
        return Ok(db_name);
    }
    must_var("PROD_DB")
}

fn credentials(owner: DbOwner) -> Result<(String, String), AppError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("FAIRWAY_OWNER_USER")?,
            must_var("FAIRWAY_OWNER_PASSWORD")?,
        )),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
