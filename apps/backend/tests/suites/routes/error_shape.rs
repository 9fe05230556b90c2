use actix_web::http::header::RETRY_AFTER;
use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use backend::error::AppError;
use backend::errors::ErrorCode;
use backend_test_support::problem_details::assert_problem_details_from_service_response;

use crate::support::{create_test_app, memory_state};

async fn invalid_hole() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(ErrorCode::InvalidHole, "Hole must be between 1 and 9"))
}

async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(ErrorCode::NotFound, "Record not found"))
}

async fn internal() -> Result<HttpResponse, AppError> {
    Err(AppError::internal("boom"))
}

async fn db_unavailable() -> Result<HttpResponse, AppError> {
    Err(AppError::db_unavailable())
}

#[actix_web::test]
async fn error_responses_are_problem_details() {
    let app = create_test_app(memory_state().await)
        .with_routes(|cfg| {
            cfg.route("/_test/invalid", web::get().to(invalid_hole))
                .route("/_test/not_found", web::get().to(not_found))
                .route("/_test/internal", web::get().to(internal))
                .route("/_test/db_unavailable", web::get().to(db_unavailable));
        })
        .build()
        .await;

    let cases = [
        ("/_test/invalid", StatusCode::BAD_REQUEST, "INVALID_HOLE"),
        ("/_test/not_found", StatusCode::NOT_FOUND, "NOT_FOUND"),
        ("/_test/internal", StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
        ("/_test/db_unavailable", StatusCode::SERVICE_UNAVAILABLE, "DB_UNAVAILABLE"),
    ];

    for (uri, status, code) in cases {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let problem =
            assert_problem_details_from_service_response(resp, status, code, None).await;
        assert_eq!(
            problem.type_,
            format!("https://pubgolf.dev/errors/{}", code.to_lowercase())
        );
        assert_ne!(problem.trace_id, "unknown", "{uri} should run inside a trace scope");
    }
}

#[actix_web::test]
async fn request_id_matches_trace_id_and_retry_after_on_503() {
    let app = create_test_app(memory_state().await)
        .with_routes(|cfg| {
            cfg.route("/_test/db_unavailable", web::get().to(db_unavailable));
        })
        .build()
        .await;

    let req = test::TestRequest::get()
        .uri("/_test/db_unavailable")
        .to_request();
    let resp = test::call_service(&app, req).await;

    let headers = resp.headers();
    assert_eq!(headers.get(RETRY_AFTER).unwrap(), "1");
    assert_eq!(
        headers.get("x-request-id").unwrap(),
        headers.get("x-trace-id").unwrap()
    );
}
