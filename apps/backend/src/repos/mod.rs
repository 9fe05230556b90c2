//! Storage capabilities for the domain layer.

pub mod score_cards;

pub use score_cards::ScoreCardRepo;
