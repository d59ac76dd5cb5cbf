use crate::Score;

/// Identifies one notification, so that a timer started for a superseded
/// notification cannot clear its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct NotificationId(pub u64);

/// The banner shown after a round is scored. Cleared when its timer expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    score: Score,
}

impl Notification {
    #[must_use]
    pub const fn new(id: NotificationId, score: Score) -> Self {
        Self { id, score }
    }

    #[must_use]
    pub const fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub const fn points_gained(&self) -> u32 {
        self.score.points
    }

    #[must_use]
    pub const fn score(&self) -> &Score {
        &self.score
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.score.to_string()
    }
}
