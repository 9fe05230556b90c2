use actix_web::http::header::{AUTHORIZATION, CONTENT_TYPE, WWW_AUTHENTICATE};
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;

use crate::common::read_text;
use crate::support::auth::{bearer, expired_bearer, foreign_bearer};
use crate::support::{create_test_app, memory_state};

fn get_user(auth: Option<String>) -> actix_http::Request {
    let mut req = test::TestRequest::get().uri("/user");
    if let Some(value) = auth {
        req = req.insert_header((AUTHORIZATION, value));
    }
    req.to_request()
}

#[actix_web::test]
async fn returns_display_name_as_text() {
    let app = create_test_app(memory_state().await)
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(&app, get_user(Some(bearer("auth0|1", Some("Alice"))))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(read_text(resp).await, "Alice");
}

#[actix_web::test]
async fn falls_back_to_subject_without_name() {
    let app = create_test_app(memory_state().await)
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(&app, get_user(Some(bearer("auth0|2", None)))).await;
    assert_eq!(read_text(resp).await, "auth0|2");
}

#[actix_web::test]
async fn rejects_bad_credentials() {
    let app = create_test_app(memory_state().await)
        .with_prod_routes()
        .build()
        .await;

    let cases = [
        (None, "UNAUTHORIZED_MISSING_BEARER"),
        (Some("Token abc".to_string()), "UNAUTHORIZED_MISSING_BEARER"),
        (Some("Bearer not.a.jwt".to_string()), "UNAUTHORIZED_INVALID_JWT"),
        (Some(foreign_bearer("auth0|3")), "UNAUTHORIZED_INVALID_JWT"),
        (Some(expired_bearer("auth0|4")), "UNAUTHORIZED_EXPIRED_JWT"),
    ];

    for (auth, code) in cases {
        let resp = test::call_service(&app, get_user(auth)).await;
        assert_eq!(
            resp.headers().get(WWW_AUTHENTICATE).unwrap(),
            "Bearer",
            "{code}"
        );
        assert_problem_details_from_service_response(resp, StatusCode::UNAUTHORIZED, code, None)
            .await;
    }
}
