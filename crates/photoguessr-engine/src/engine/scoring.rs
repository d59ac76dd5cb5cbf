use std::fmt;

use serde::{Deserialize, Serialize};

use crate::YearSpec;

/// Points for guessing the exact year of an exactly dated photo.
pub const EXACT_MATCH_POINTS: u32 = 50;

/// Points for a guess inside the span of a photo dated to a range of years.
pub const WITHIN_RANGE_POINTS: u32 = 40;

/// Points lost per year of distance from the target.
pub const PENALTY_PER_YEAR: u32 = 2;

/// Result of scoring one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub points: u32,
    pub outcome: ScoreOutcome,
}

/// Which scoring branch produced a [`Score`], with the values its message needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreOutcome {
    ExactMatch { year: i32 },
    OffByYears { year: i32, distance: u32 },
    WithinRange { lower: i32, upper: i32 },
    OutsideRange { lower: i32, upper: i32, distance: u32 },
}

/// Scores `guess` against the capture year of a photo.
///
/// # Scoring
///
/// - Exact year `y`: a correct guess earns [`EXACT_MATCH_POINTS`]; otherwise the
///   points are `50 - 2 * |y - guess|`, floored at zero.
/// - Range `lo..=hi`: a guess inside earns [`WITHIN_RANGE_POINTS`]; otherwise the
///   distance is measured from the midpoint `(lo + hi) / 2` (integer division) and
///   the points are `40 - 2 * distance`, floored at zero.
///
/// The function is total over all `i32` inputs.
///
/// # Example
///
/// ```
/// use photoguessr_engine::{YearSpec, score};
///
/// assert_eq!(score(YearSpec::Exact { year: 1950 }, 1950).points, 50);
/// assert_eq!(score(YearSpec::Exact { year: 1950 }, 1940).points, 30);
/// assert_eq!(score(YearSpec::Range { lower: 1900, upper: 1920 }, 1910).points, 40);
/// assert_eq!(score(YearSpec::Range { lower: 1900, upper: 1920 }, 2000).points, 0);
/// ```
#[must_use]
pub fn score(target: YearSpec, guess: i32) -> Score {
    match target {
        YearSpec::Exact { year } if target.contains(guess) => Score {
            points: EXACT_MATCH_POINTS,
            outcome: ScoreOutcome::ExactMatch { year },
        },
        YearSpec::Exact { year } => {
            let distance = distance(i64::from(year), guess);
            Score {
                points: penalized(EXACT_MATCH_POINTS, distance),
                outcome: ScoreOutcome::OffByYears { year, distance },
            }
        }
        YearSpec::Range { lower, upper } if target.contains(guess) => Score {
            points: WITHIN_RANGE_POINTS,
            outcome: ScoreOutcome::WithinRange { lower, upper },
        },
        YearSpec::Range { lower, upper } => {
            let mid = (i64::from(lower) + i64::from(upper)) / 2;
            let distance = distance(mid, guess);
            Score {
                points: penalized(WITHIN_RANGE_POINTS, distance),
                outcome: ScoreOutcome::OutsideRange {
                    lower,
                    upper,
                    distance,
                },
            }
        }
    }
}

fn distance(target: i64, guess: i32) -> u32 {
    let distance = (target - i64::from(guess)).unsigned_abs();
    u32::try_from(distance).unwrap_or(u32::MAX)
}

fn penalized(max_points: u32, distance: u32) -> u32 {
    max_points.saturating_sub(distance.saturating_mul(PENALTY_PER_YEAR))
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let points = self.points;
        match self.outcome {
            ScoreOutcome::ExactMatch { .. } => write!(f, "You nailed it! {points} points!"),
            ScoreOutcome::OffByYears { year, distance } => write!(
                f,
                "Photo was taken in {year} which is {distance} years away. {points} points!"
            ),
            ScoreOutcome::WithinRange { .. } => {
                write!(f, "Your guess is within the range! {points} points!")
            }
            ScoreOutcome::OutsideRange { lower, upper, .. } => write!(
                f,
                "Photo was taken between {lower} and {upper}\n{points} points!"
            ),
        }
    }
}
