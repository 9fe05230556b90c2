use actix_web::{web, HttpResponse};

use crate::extractors::CurrentUser;

/// The caller's display name as plain text.
async fn current_user(user: CurrentUser) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(user.display_name)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/user", web::get().to(current_user));
}
