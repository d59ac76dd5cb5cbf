use serde::{Deserialize, Serialize};

/// How many rounds a session lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameMode {
    /// A session of at most `max` rounds. `current` counts the rounds scored so far.
    Limited { max: u32, current: u32 },
}

impl GameMode {
    #[must_use]
    pub const fn limited(max: u32) -> Self {
        Self::Limited { max, current: 0 }
    }

    #[must_use]
    pub const fn current(&self) -> u32 {
        match *self {
            Self::Limited { current, .. } => current,
        }
    }

    #[must_use]
    pub const fn max(&self) -> u32 {
        match *self {
            Self::Limited { max, .. } => max,
        }
    }

    /// Counts one more scored round.
    pub const fn advance(&mut self) {
        match self {
            Self::Limited { current, .. } => *current = current.saturating_add(1),
        }
    }

    /// Rewinds the round counter for a new session.
    pub const fn reset(&mut self) {
        match self {
            Self::Limited { current, .. } => *current = 0,
        }
    }

    /// Returns `true` once as many rounds as allowed have been scored.
    #[must_use]
    pub const fn is_limit_reached(&self) -> bool {
        match *self {
            Self::Limited { max, current } => current >= max,
        }
    }
}
