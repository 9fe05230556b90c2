use actix_web::web;

pub mod health;
pub mod scores;
pub mod user;

/// Register every route. Shared by `main` and the HTTP tests so both see
/// the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // /health
    cfg.configure(health::configure_routes);

    // /api/v1/score/**
    cfg.service(web::scope("/api/v1/score").configure(scores::configure_routes));

    // /user
    cfg.configure(user::configure_routes);
}
