use serde::{Deserialize, Serialize};

use crate::{
    FetchError, FetchPlan, FetchResponse, FetchTicket, NotificationId, PhotoId, Score, YearSpec,
};

/// Everything that can happen to a session: player intents and completions of
/// work started by earlier [`Command`]s.
#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub enum Action {
    /// Start (or restart) the session for its location.
    StartSession,
    /// A photo search issued by [`Command::FetchPhotos`] finished.
    FetchCompleted {
        ticket: FetchTicket,
        result: Result<FetchResponse, FetchError>,
    },
    /// The player moved the year picker.
    SetGuess(i32),
    /// The player submitted the current guess for the current photo.
    SubmitGuess,
    /// The timer of a notification ran out.
    NotificationExpired(NotificationId),
    OpenExitMenu,
    CancelExitMenu,
    ConfirmExit,
    DismissGameOver,
}

/// Side effects requested by the state machine, to be run in order by a driver.
#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub enum Command {
    /// Search photos near the location. Completes with [`Action::FetchCompleted`].
    FetchPhotos(FetchPlan),
    /// Warm the image cache for these image references. Fire-and-forget.
    PrefetchImages(Vec<String>),
    /// Stop warming the image cache.
    CancelPrefetch,
    /// Remember the photo as the last one seen. Fire-and-forget.
    RecordSeen(PhotoId),
    /// Expire the notification after the notification delay, superseding any
    /// running timer. Completes with [`Action::NotificationExpired`].
    StartNotificationTimer(NotificationId),
    CancelNotificationTimer,
    /// The session is over and may be discarded by its owner.
    CloseSession(SessionClosed),
}

/// Emitted to the owner of a session when it ends, by exit or by dismissing the
/// game over screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClosed {
    pub final_score: u32,
}

/// One scored round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub photo_id: PhotoId,
    pub title: String,
    pub target: YearSpec,
    pub guess: i32,
    pub score: Score,
}
