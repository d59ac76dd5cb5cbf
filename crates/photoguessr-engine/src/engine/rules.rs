use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::TitleFilter;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidRulesError {
    #[display("a session needs at least one round")]
    NoRounds,
    #[display("at least one photo must be requested")]
    NoPhotosRequested,
    #[display("guess range {start}..={end} is empty")]
    EmptyGuessRange { start: i32, end: i32 },
}

/// Tunable parameters of a session.
///
/// Deserializable from JSON; missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Number of rounds in a session.
    pub max_rounds: u32,
    /// Number of photos requested from the search service per session.
    pub fetch_limit: u32,
    /// Years the player can pick from.
    pub guess_range: RangeInclusive<i32>,
    /// Guess preset when a session starts.
    pub default_guess: i32,
    pub title_filter: TitleFilter,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_rounds: 10,
            fetch_limit: 100,
            guess_range: 1826..=2000,
            default_guess: 1913,
            title_filter: TitleFilter::default(),
        }
    }
}

impl GameRules {
    pub fn validate(&self) -> Result<(), InvalidRulesError> {
        if self.max_rounds == 0 {
            return Err(InvalidRulesError::NoRounds);
        }
        if self.fetch_limit == 0 {
            return Err(InvalidRulesError::NoPhotosRequested);
        }
        if self.guess_range.is_empty() {
            return Err(InvalidRulesError::EmptyGuessRange {
                start: *self.guess_range.start(),
                end: *self.guess_range.end(),
            });
        }
        Ok(())
    }

    /// Clamps `year` into the selectable guess range.
    ///
    /// # Panics
    ///
    /// Panics if the guess range is empty; [`Self::validate`] rejects such rules.
    #[must_use]
    pub fn clamp_guess(&self, year: i32) -> i32 {
        year.clamp(*self.guess_range.start(), *self.guess_range.end())
    }
}
