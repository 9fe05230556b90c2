//! Pure scorekeeping logic: no HTTP, no database.

pub mod rules;
pub mod score_card;

pub use rules::{ScoreRules, Submission, ValidationMode};
pub use score_card::{standings, Hole, ScoreCard, HOLE_COUNT};
