//! Score card storage capability.

use async_trait::async_trait;

use crate::domain::ScoreCard;
use crate::errors::domain::DomainError;

/// Everything the service needs from a score card store.
///
/// Implementations are keyed by player name and hold at most one card per
/// name. There is no versioning: concurrent saves for the same name are
/// last-write-wins. Only `insert` refuses to touch an existing card.
#[async_trait]
pub trait ScoreCardRepo: Send + Sync + std::fmt::Debug {
    async fn find_by_name(&self, name: &str) -> Result<Option<ScoreCard>, DomainError>;

    /// Insert the card, or replace the stored card with the same name.
    async fn save(&self, card: &ScoreCard) -> Result<(), DomainError>;

    /// Insert the card only if the name is free.
    ///
    /// Fails with `ConflictKind::PlayerExists` when a card already exists.
    async fn insert(&self, card: &ScoreCard) -> Result<(), DomainError>;

    /// Returns whether a card was removed.
    async fn delete_by_name(&self, name: &str) -> Result<bool, DomainError>;

    /// Returns how many cards were removed.
    async fn delete_all(&self) -> Result<u64, DomainError>;

    /// All cards, ordered by name.
    async fn list_all(&self) -> Result<Vec<ScoreCard>, DomainError>;
}
