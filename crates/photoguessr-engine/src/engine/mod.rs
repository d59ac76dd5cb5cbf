//! Game logic and session state management.
//!
//! - [`score`] - scoring policy for a single guess
//! - [`PhotoDeck`] - undrawn photos of the active session, drawn at random
//! - [`GameMode`] - round counting and the round limit
//! - [`Notification`] - the short-lived banner announcing a round's points
//! - [`SessionState`] - the session state machine
//!
//! # Session Flow
//!
//! 1. [`Action::StartSession`] resets the session and asks for a photo fetch
//! 2. [`Action::FetchCompleted`] fills the deck and draws the first photo
//! 3. [`Action::SetGuess`] / [`Action::SubmitGuess`] score the round and draw the next photo
//! 4. The session ends in [`GameOver`] when the round limit is reached or the deck runs dry
//! 5. [`Action::DismissGameOver`] closes the session
//!
//! # Example
//!
//! ```
//! use photoguessr_engine::{Action, City, Command, GameRules, SessionState};
//!
//! let location = City::find("Copenhagen").unwrap().location();
//! let mut state = SessionState::new(location, GameRules::default());
//!
//! let commands = state.reduce(Action::StartSession);
//! assert!(matches!(commands.as_slice(), [.., Command::FetchPhotos(_)]));
//! assert!(state.is_fetching());
//! ```

pub use self::{
    action::*, game_mode::*, game_over::*, notification::*, photo_deck::*, rules::*, scoring::*,
    session::*,
};

mod action;
mod game_mode;
mod game_over;
mod notification;
mod photo_deck;
mod rules;
mod scoring;
mod session;
