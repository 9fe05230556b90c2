use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Runtime environment; selects the database name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Backing store for score cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
    /// Process-local map, no SQL database at all
    InMemory,
}

impl DbKind {
    /// Read `DB_KIND` (defaults to postgres)
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("DB_KIND") {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(DbKind::Postgres),
        }
    }

    /// Whether this kind is served by a SeaORM connection
    pub fn is_sql(self) -> bool {
        !matches!(self, DbKind::InMemory)
    }
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" => Ok(DbKind::SqliteMemory),
            "memory" | "in-memory" => Ok(DbKind::InMemory),
            other => Err(AppError::config(format!(
                "Unsupported DB_KIND '{other}'; \
                 expected postgres | sqlite-file | sqlite-memory | memory"
            ))),
        }
    }
}

impl fmt::Display for DbKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DbKind::Postgres => "postgres",
            DbKind::SqliteFile => "sqlite-file",
            DbKind::SqliteMemory => "sqlite-memory",
            DbKind::InMemory => "memory",
        };
        f.write_str(s)
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

/// Build a connection URL for the given store, environment and owner.
pub fn db_url(kind: DbKind, env: RuntimeEnv, owner: DbOwner) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => {
            let host = host();
            let port = port();
            let db_name = db_name(env)?;
            let (username, password) = credentials(owner)?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => Ok(format!("sqlite://{}?mode=rwc", sqlite_file_path(env))),
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
        DbKind::InMemory => Err(AppError::config(
            "The in-memory store has no database URL",
        )),
    }
}

/// Path of the SQLite database file for an environment
pub fn sqlite_file_path(env: RuntimeEnv) -> String {
    let dir = env::var("SQLITE_DB_DIR").unwrap_or_else(|_| "./data".to_string());
    let file = match env {
        RuntimeEnv::Prod => "pubgolf.db",
        RuntimeEnv::Test => "pubgolf_test.db",
    };
    format!("{}/{file}", dir.trim_end_matches('/'))
}

/// Get database host from environment (defaults to localhost)
fn host() -> String {
    env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string())
}

/// Get database port from environment (defaults to 5432)
fn port() -> String {
    env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string())
}

fn db_name(env: RuntimeEnv) -> Result<String, AppError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var("TEST_DB")?;
            // test DB must end with "_test"
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

fn credentials(owner: DbOwner) -> Result<(String, String), AppError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("PUBGOLF_OWNER_USER")?,
            must_var("PUBGOLF_OWNER_PASSWORD")?,
        )),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
