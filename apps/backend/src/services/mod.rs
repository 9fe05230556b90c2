pub mod scores;

pub use scores::ScoreService;
