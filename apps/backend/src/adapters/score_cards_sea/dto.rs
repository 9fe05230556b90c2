//! DTOs for score_cards_sea adapter.

use crate::domain::{ScoreCard, HOLE_COUNT};

/// Row values for an insert-or-replace.
#[derive(Debug, Clone)]
pub struct ScoreCardUpsert {
    pub name: String,
    pub holes: [i32; HOLE_COUNT],
    pub total: i32,
}

impl From<&ScoreCard> for ScoreCardUpsert {
    fn from(card: &ScoreCard) -> Self {
        Self {
            name: card.name().to_string(),
            holes: *card.holes(),
            total: card.total(),
        }
    }
}
