//! Database connection management and startup migration.

use std::future::Future;
use std::path::Path;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, sqlite_file_path, DbKind, DbOwner, RuntimeEnv};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_INTERVAL_MS: u64 = 500;
/// Pool lifetime for the single in-memory SQLite connection
const SQLITE_MEMORY_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 10);

/// Retry a connection attempt with fixed interval delays.
/// Returns the error of the last attempt once all attempts are used.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(attempt, max_attempts, interval_ms, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

fn connect_options(kind: DbKind, url: String) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url);
    opt.acquire_timeout(Duration::from_secs(2))
        .sqlx_logging(false);
    // Every in-memory SQLite connection is its own database; the pool keeps
    // exactly one for the life of the process.
    if kind == DbKind::SqliteMemory {
        opt.min_connections(1)
            .max_connections(1)
            .max_lifetime(SQLITE_MEMORY_LIFETIME)
            .idle_timeout(SQLITE_MEMORY_LIFETIME);
    }
    opt
}

/// Open a connection pool for the given store. Does NOT run migrations.
pub async fn connect_db(
    kind: DbKind,
    env: RuntimeEnv,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind, env, owner)?;

    if kind == DbKind::SqliteFile {
        ensure_sqlite_dir(env)?;
    }

    let opt = connect_options(kind, url);
    if kind == DbKind::Postgres {
        retry_connection(
            || {
                let opt = opt.clone();
                async move {
                    Database::connect(opt).await.map_err(|e| {
                        AppError::config(format!("failed to connect to Postgres: {e}"))
                    })
                }
            },
            CONNECT_ATTEMPTS,
            CONNECT_INTERVAL_MS,
        )
        .await
    } else {
        Database::connect(opt)
            .await
            .map_err(|e| AppError::config(format!("failed to connect to database: {e}")))
    }
}

fn ensure_sqlite_dir(env: RuntimeEnv) -> Result<(), AppError> {
    let path = sqlite_file_path(env);
    if let Some(dir) = Path::new(&path).parent() {
        std::fs::create_dir_all(dir).map_err(|e| {
            AppError::config(format!(
                "failed to create SQLite directory {}: {e}",
                dir.display()
            ))
        })?;
    }
    Ok(())
}

/// Connect, bring the schema up to date and return the application pool.
pub async fn bootstrap_db(kind: DbKind, env: RuntimeEnv) -> Result<DatabaseConnection, AppError> {
    info!(env = ?env, db_kind = %kind, pid = std::process::id(), "bootstrap=start");

    let conn = match kind {
        DbKind::SqliteMemory => {
            // Migrate on the connection that will be returned.
            let conn = connect_db(kind, env, DbOwner::App).await?;
            migrate(&conn, MigrationCommand::Up).await?;
            conn
        }
        DbKind::Postgres | DbKind::SqliteFile => {
            let owner = connect_db(kind, env, DbOwner::Owner).await?;
            migrate(&owner, MigrationCommand::Up).await?;
            if let Err(e) = owner.close().await {
                warn!(error = %e, "failed to close migration connection");
            }
            connect_db(kind, env, DbOwner::App).await?
        }
        DbKind::InMemory => {
            return Err(AppError::config(
                "The in-memory store has no database to bootstrap",
            ))
        }
    };

    info!("bootstrap=ready");
    Ok(conn)
}
