#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod web;

// Re-exports for public API
pub use auth::jwt::{mint_access_token, verify_access_token};
pub use config::db::{db_url, DbKind, DbOwner, RuntimeEnv};
pub use domain::{Hole, ScoreCard, ScoreRules, ValidationMode};
pub use error::AppError;
pub use extractors::{CurrentUser, JwtClaims, ValidatedQuery};
pub use infra::db::{bootstrap_db, connect_db};
pub use infra::state::build_state;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use services::ScoreService;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
