use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::domain::ScoreRules;
use crate::repos::score_cards::ScoreCardRepo;
use crate::services::scores::ScoreService;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection; `None` when running on the in-memory store
    pub db: Option<DatabaseConnection>,
    /// Score card storage
    pub score_cards: Arc<dyn ScoreCardRepo>,
    /// Identity-provider token settings
    pub security: SecurityConfig,
    /// Submission validation rules
    pub rules: ScoreRules,
}

impl AppState {
    pub fn new(
        db: Option<DatabaseConnection>,
        score_cards: Arc<dyn ScoreCardRepo>,
        security: SecurityConfig,
        rules: ScoreRules,
    ) -> Self {
        Self {
            db,
            score_cards,
            security,
            rules,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    /// Score service bound to this state's store and rules.
    pub fn scores(&self) -> ScoreService<dyn ScoreCardRepo> {
        ScoreService::new(Arc::clone(&self.score_cards), self.rules)
    }
}
