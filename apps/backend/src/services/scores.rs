//! Score keeping service.

use std::sync::Arc;

use tracing::info;

use crate::domain::{standings, ScoreCard, ScoreRules};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::score_cards::ScoreCardRepo;

/// Score keeping operations over any score card store.
pub struct ScoreService<R: ScoreCardRepo + ?Sized> {
    repo: Arc<R>,
    rules: ScoreRules,
}

impl<R: ScoreCardRepo + ?Sized> ScoreService<R> {
    pub fn new(repo: Arc<R>, rules: ScoreRules) -> Self {
        Self { repo, rules }
    }

    pub fn rules(&self) -> &ScoreRules {
        &self.rules
    }

    /// Record `score` for `hole` on the named player's card, creating the
    /// card on first use.
    ///
    /// Returns the updated card, or `None` when permissive rules dropped
    /// the submission.
    pub async fn submit(
        &self,
        name: &str,
        hole: i64,
        score: i64,
    ) -> Result<Option<ScoreCard>, AppError> {
        let Some(submission) = self.rules.check_submission(name, hole, score)? else {
            info!(player = name, hole, score, "score.ignored");
            return Ok(None);
        };

        let mut card = self
            .repo
            .find_by_name(&submission.name)
            .await?
            .unwrap_or_else(|| ScoreCard::new(submission.name.clone()));
        card.set_hole(submission.hole, submission.score);
        self.repo.save(&card).await?;

        info!(
            player = card.name(),
            hole = submission.hole.number(),
            score = submission.score,
            total = card.total(),
            "score.submitted"
        );
        Ok(Some(card))
    }

    /// Every card, lowest total first.
    pub async fn standings(&self) -> Result<Vec<ScoreCard>, AppError> {
        let cards = self.repo.list_all().await?;
        Ok(standings(cards))
    }

    pub async fn find(&self, name: &str) -> Result<Option<ScoreCard>, AppError> {
        let name = self.rules.check_name(name)?;
        Ok(self.repo.find_by_name(&name).await?)
    }

    /// Create an all-zero card. Fails with a conflict if the name is taken.
    pub async fn join(&self, name: &str) -> Result<ScoreCard, AppError> {
        let name = self.rules.check_name(name)?;
        let card = ScoreCard::new(name);

        match self.repo.insert(&card).await {
            Ok(()) => {}
            Err(DomainError::Conflict(ConflictKind::PlayerExists, _)) => {
                return Err(DomainError::conflict(
                    ConflictKind::PlayerExists,
                    format!("Player '{}' already has a score card", card.name()),
                )
                .into());
            }
            Err(e) => return Err(e.into()),
        }

        info!(player = card.name(), "score.joined");
        Ok(card)
    }

    /// Remove the named player's card. Absent names are a no-op.
    pub async fn delete(&self, name: &str) -> Result<(), AppError> {
        let name = self.rules.check_name(name)?;
        let removed = self.repo.delete_by_name(&name).await?;
        info!(player = %name, removed, "score.deleted");
        Ok(())
    }

    /// Remove every card.
    pub async fn reset(&self) -> Result<u64, AppError> {
        let removed = self.repo.delete_all().await?;
        info!(removed, "score.reset");
        Ok(removed)
    }
}
