use std::sync::Arc;

use tracing::info;

use crate::adapters::{InMemoryScoreCardRepo, ScoreCardRepoSea};
use crate::config::db::{DbKind, RuntimeEnv};
use crate::domain::ScoreRules;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for AppState instances (used in both tests and main)
pub struct StateBuilder {
    env: RuntimeEnv,
    db_kind: DbKind,
    security_config: SecurityConfig,
    rules: ScoreRules,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            env: RuntimeEnv::Test,
            db_kind: DbKind::InMemory,
            security_config: SecurityConfig::default(),
            rules: ScoreRules::default(),
        }
    }

    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = kind;
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub fn with_rules(mut self, rules: ScoreRules) -> Self {
        self.rules = rules;
        self
    }

    /// Connect and migrate (SQL stores) and assemble the state.
    pub async fn build(self) -> Result<AppState, AppError> {
        let state = if self.db_kind.is_sql() {
            let conn = bootstrap_db(self.db_kind, self.env).await?;
            let repo = Arc::new(ScoreCardRepoSea::new(conn.clone()));
            AppState::new(Some(conn), repo, self.security_config, self.rules)
        } else {
            AppState::new(
                None,
                Arc::new(InMemoryScoreCardRepo::new()),
                self.security_config,
                self.rules,
            )
        };

        info!(
            db_kind = %self.db_kind,
            mode = ?self.rules.mode,
            min_score = self.rules.min_score,
            max_score = self.rules.max_score,
            "state=ready"
        );
        Ok(state)
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
