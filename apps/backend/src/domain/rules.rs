//! Input rules for score submissions.
//!
//! Strict mode rejects anything out of range. Permissive mode reproduces
//! the early scoreboard: any non-blank name, and out-of-range holes or
//! scores are dropped without touching the store.

use lazy_regex::regex_is_match;

use super::score_card::Hole;
use crate::errors::domain::{DomainError, ValidationKind};

pub const DEFAULT_MIN_SCORE: i32 = -10;
pub const DEFAULT_MAX_SCORE: i32 = 10;
/// Width of the `score_cards.name` column
pub const MAX_NAME_CHARS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    #[default]
    Strict,
    Permissive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRules {
    pub min_score: i32,
    pub max_score: i32,
    pub mode: ValidationMode,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            max_score: DEFAULT_MAX_SCORE,
            mode: ValidationMode::Strict,
        }
    }
}

/// A submission that passed the rules and should be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub hole: Hole,
    pub score: i32,
}

impl ScoreRules {
    pub fn permissive() -> Self {
        Self {
            mode: ValidationMode::Permissive,
            ..Self::default()
        }
    }

    /// Validate a player name, returning the form to store it under.
    pub fn check_name(&self, name: &str) -> Result<String, DomainError> {
        match self.mode {
            ValidationMode::Strict => {
                if regex_is_match!(r"^[a-zA-Z]{2,20}$", name) {
                    Ok(name.to_string())
                } else {
                    Err(DomainError::validation(
                        ValidationKind::PlayerName,
                        "Name must be 2 to 20 letters (a-z, A-Z)",
                    ))
                }
            }
            ValidationMode::Permissive => {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    Err(DomainError::validation(
                        ValidationKind::PlayerName,
                        "Name must not be blank",
                    ))
                } else if trimmed.chars().count() > MAX_NAME_CHARS {
                    Err(DomainError::validation(
                        ValidationKind::PlayerName,
                        format!("Name must be at most {MAX_NAME_CHARS} characters"),
                    ))
                } else {
                    Ok(trimmed.to_string())
                }
            }
        }
    }

    /// Decide what to do with a raw submission.
    ///
    /// `Ok(Some(_))` applies it, `Ok(None)` drops it (permissive mode only),
    /// `Err(_)` rejects it.
    pub fn check_submission(
        &self,
        name: &str,
        hole: i64,
        score: i64,
    ) -> Result<Option<Submission>, DomainError> {
        let name = self.check_name(name)?;

        let hole = match (Hole::new(hole), self.mode) {
            (Ok(hole), _) => hole,
            (Err(_), ValidationMode::Permissive) => return Ok(None),
            (Err(e), ValidationMode::Strict) => return Err(e),
        };

        let in_bounds = (i64::from(self.min_score)..=i64::from(self.max_score)).contains(&score);
        if !in_bounds {
            return match self.mode {
                ValidationMode::Permissive => Ok(None),
                ValidationMode::Strict => Err(DomainError::validation(
                    ValidationKind::Score,
                    format!(
                        "Score must be between {} and {}, got {score}",
                        self.min_score, self.max_score
                    ),
                )),
            };
        }

        Ok(Some(Submission {
            name,
            hole,
            // in_bounds guarantees this fits
            score: score as i32,
        }))
    }
}
