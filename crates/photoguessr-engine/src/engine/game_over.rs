use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum GameOverReason {
    #[display("all rounds played")]
    RoundLimitReached,
    #[display("ran out of photographs")]
    DeckExhausted,
}

/// Terminal state of a session, shown until the player dismisses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOver {
    pub final_score: u32,
    pub reason: GameOverReason,
}
