use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    time: String,
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let (db, db_error, migrations) = match app_state.db() {
        None => ("memory", None, "n/a".to_string()),
        Some(conn) => {
            let probe = conn
                .query_one(Statement::from_string(
                    conn.get_database_backend(),
                    "SELECT 1 AS health_check".to_string(),
                ))
                .await;
            match probe {
                Ok(_) => {
                    let version = match get_latest_migration_version(conn).await {
                        Ok(Some(version)) => version,
                        Ok(None) => "no_migrations".to_string(),
                        Err(_) => "unknown".to_string(),
                    };
                    ("ok", None, version)
                }
                Err(e) => (
                    "error",
                    Some(format!("DB query failed: {e}")),
                    "unknown".to_string(),
                ),
            }
        }
    };

    let status = if db == "error" { "degraded" } else { "ok" };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status,
        app_version: env!("CARGO_PKG_VERSION"),
        db,
        db_error,
        migrations,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
