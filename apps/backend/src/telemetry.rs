use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,actix_web=info,sqlx=warn,sea_orm=warn,sea_orm_migration=warn";

/// Install the global subscriber. JSON lines unless `LOG_FORMAT=pretty`.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let pretty = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("pretty"))
        .unwrap_or(false);

    let base = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    if pretty {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(base.pretty())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(base.with_ansi(false).json())
            .init();
    }
}
