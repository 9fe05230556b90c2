use backend::config::db::DbKind;
use backend::domain::ScoreRules;
use backend::infra::state::build_state;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;

/// Secret shared by test states and the tokens minted in `support::auth`.
pub const TEST_JWT_SECRET: &[u8] = b"pubgolf-integration-test-secret";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_JWT_SECRET)
}

pub async fn memory_state_with(rules: ScoreRules) -> AppState {
    build_state()
        .with_security(test_security())
        .with_rules(rules)
        .build()
        .await
        .expect("in-memory state should build")
}

pub async fn memory_state() -> AppState {
    memory_state_with(ScoreRules::default()).await
}

/// Fresh, migrated SQLite in-memory database per call.
pub async fn sqlite_state_with(rules: ScoreRules) -> AppState {
    build_state()
        .with_db(DbKind::SqliteMemory)
        .with_security(test_security())
        .with_rules(rules)
        .build()
        .await
        .expect("sqlite-memory state should build")
}

pub async fn sqlite_state() -> AppState {
    sqlite_state_with(ScoreRules::default()).await
}
