//! The score card: nine hole scores and their total.

use std::fmt;

use crate::errors::domain::{DomainError, ValidationKind};

/// Number of holes on a card
pub const HOLE_COUNT: usize = 9;

/// A hole number, guaranteed to be in `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hole(u8);

impl Hole {
    pub const FIRST: Hole = Hole(1);
    pub const LAST: Hole = Hole(HOLE_COUNT as u8);

    pub fn new(number: i64) -> Result<Self, DomainError> {
        if (1..=HOLE_COUNT as i64).contains(&number) {
            Ok(Hole(number as u8))
        } else {
            Err(DomainError::validation(
                ValidationKind::Hole,
                format!("Hole must be between 1 and {HOLE_COUNT}, got {number}"),
            ))
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    fn index(self) -> usize {
        usize::from(self.0) - 1
    }

    /// Holes 1 through 9 in play order
    pub fn all() -> impl Iterator<Item = Hole> {
        (1..=HOLE_COUNT as u8).map(Hole)
    }
}

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One player's card. The total is always derived from the holes, so it
/// can never drift from their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    name: String,
    holes: [i32; HOLE_COUNT],
}

impl ScoreCard {
    /// A fresh card with every hole at zero
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_holes(name, [0; HOLE_COUNT])
    }

    pub fn from_holes(name: impl Into<String>, holes: [i32; HOLE_COUNT]) -> Self {
        Self {
            name: name.into(),
            holes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn holes(&self) -> &[i32; HOLE_COUNT] {
        &self.holes
    }

    pub fn hole(&self, hole: Hole) -> i32 {
        self.holes[hole.index()]
    }

    /// Overwrite one hole; the total follows.
    pub fn set_hole(&mut self, hole: Hole, score: i32) {
        self.holes[hole.index()] = score;
    }

    pub fn total(&self) -> i32 {
        self.holes.iter().sum()
    }
}

/// Order cards for the leaderboard: ascending total, lowest first.
///
/// The sort is stable, so players on equal totals keep the order the
/// store returned them in.
pub fn standings(mut cards: Vec<ScoreCard>) -> Vec<ScoreCard> {
    cards.sort_by_key(ScoreCard::total);
    cards
}
