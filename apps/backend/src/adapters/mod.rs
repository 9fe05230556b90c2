//! Concrete score card stores.

pub mod score_cards_memory;
pub mod score_cards_sea;

pub use score_cards_memory::InMemoryScoreCardRepo;
pub use score_cards_sea::ScoreCardRepoSea;
