use actix_web::{web, App, HttpServer};
use backend::config::db::{DbKind, RuntimeEnv};
use backend::config::rules::score_rules_from_env;
use backend::infra::state::build_state;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;
use backend::state::security_config::SecurityConfig;
use tracing::{error, info};

mod telemetry;

fn exit_with(msg: impl std::fmt::Display) -> ! {
    error!("{msg}");
    eprintln!("❌ {msg}");
    std::process::exit(1);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| exit_with("BACKEND_PORT must be a valid port number"));

    let security_config = SecurityConfig::from_env().unwrap_or_else(|e| exit_with(e));
    let db_kind = DbKind::from_env().unwrap_or_else(|e| exit_with(e));
    let rules = score_rules_from_env().unwrap_or_else(|e| exit_with(e));

    let app_state = build_state()
        .with_env(RuntimeEnv::Prod)
        .with_db(db_kind)
        .with_security(security_config)
        .with_rules(rules)
        .build()
        .await
        .unwrap_or_else(|e| exit_with(format!("Failed to build application state: {e}")));

    info!(%host, port, db_kind = %db_kind, "Starting pub golf backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
