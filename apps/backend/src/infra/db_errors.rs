//! SeaORM -> DomainError translation helpers.
//!
//! Adapters convert `sea_orm::DbErr` into `DomainError` here; higher layers
//! then map `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::web::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

fn is_unique_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23505")
        || msg.contains("duplicate key value violates unique constraint")
        || msg.contains("UNIQUE constraint failed")
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if is_unique_violation(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");
        if error_msg.contains("score_cards") {
            return DomainError::conflict(ConflictKind::PlayerExists, "Player already exists");
        }
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if error_msg.contains("timeout")
        || error_msg.contains("pool")
        || error_msg.contains("unavailable")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
