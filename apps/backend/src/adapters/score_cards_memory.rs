//! Process-local score card store.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{ScoreCard, HOLE_COUNT};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::score_cards::ScoreCardRepo;

/// Score cards held in a name-ordered map. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryScoreCardRepo {
    cards: RwLock<BTreeMap<String, [i32; HOLE_COUNT]>>,
}

impl InMemoryScoreCardRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScoreCardRepo for InMemoryScoreCardRepo {
    async fn find_by_name(&self, name: &str) -> Result<Option<ScoreCard>, DomainError> {
        Ok(self
            .cards
            .read()
            .get(name)
            .map(|holes| ScoreCard::from_holes(name, *holes)))
    }

    async fn save(&self, card: &ScoreCard) -> Result<(), DomainError> {
        self.cards
            .write()
            .insert(card.name().to_string(), *card.holes());
        Ok(())
    }

    async fn insert(&self, card: &ScoreCard) -> Result<(), DomainError> {
        match self.cards.write().entry(card.name().to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(*card.holes());
                Ok(())
            }
            Entry::Occupied(_) => Err(DomainError::conflict(
                ConflictKind::PlayerExists,
                "Player already exists",
            )),
        }
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.cards.write().remove(name).is_some())
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        let mut cards = self.cards.write();
        let removed = cards.len() as u64;
        cards.clear();
        Ok(removed)
    }

    async fn list_all(&self) -> Result<Vec<ScoreCard>, DomainError> {
        Ok(self
            .cards
            .read()
            .iter()
            .map(|(name, holes)| ScoreCard::from_holes(name.as_str(), *holes))
            .collect())
    }
}
