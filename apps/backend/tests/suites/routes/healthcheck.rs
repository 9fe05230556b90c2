use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

use crate::common::read_json;
use crate::support::{create_test_app, memory_state, sqlite_state};

#[actix_web::test]
async fn reports_migration_version_for_sql_store() {
    let app = create_test_app(sqlite_state().await)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20250901_000001_score_cards");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body.get("db_error").is_none());
    assert!(body["time"].as_str().is_some_and(|t| !t.is_empty()));
}

#[actix_web::test]
async fn reports_memory_store() {
    let app = create_test_app(memory_state().await)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = read_json(test::call_service(&app, req).await).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "memory");
    assert_eq!(body["migrations"], "n/a");
}
