//! Score rules from the environment.

use std::env;

use crate::domain::rules::{ScoreRules, ValidationMode};
use crate::domain::HOLE_COUNT;
use crate::error::AppError;

/// Build [`ScoreRules`] from `SCORE_MIN`, `SCORE_MAX` and `SCORE_VALIDATION`.
pub fn score_rules_from_env() -> Result<ScoreRules, AppError> {
    let defaults = ScoreRules::default();

    let min_score = int_var("SCORE_MIN")?.unwrap_or(defaults.min_score);
    let max_score = int_var("SCORE_MAX")?.unwrap_or(defaults.max_score);
    if min_score > max_score {
        return Err(AppError::config(format!(
            "SCORE_MIN ({min_score}) must not exceed SCORE_MAX ({max_score})"
        )));
    }
    // A full card of extreme scores must still total within i32.
    let widest = i64::from(min_score).abs().max(i64::from(max_score).abs());
    if widest * HOLE_COUNT as i64 > i64::from(i32::MAX) {
        return Err(AppError::config(format!(
            "SCORE_MIN ({min_score}) and SCORE_MAX ({max_score}) allow a card total beyond {}",
            i32::MAX
        )));
    }

    let mode = match env::var("SCORE_VALIDATION") {
        Err(_) => ValidationMode::default(),
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "strict" => ValidationMode::Strict,
            "permissive" => ValidationMode::Permissive,
            other => {
                return Err(AppError::config(format!(
                    "SCORE_VALIDATION must be 'strict' or 'permissive', got '{other}'"
                )))
            }
        },
    };

    Ok(ScoreRules {
        min_score,
        max_score,
        mode,
    })
}

fn int_var(name: &str) -> Result<Option<i32>, AppError> {
    match env::var(name) {
        Err(_) => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{name} must be an integer, got '{raw}'"))),
    }
}
