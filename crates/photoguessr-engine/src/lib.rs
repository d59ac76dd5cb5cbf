//! Game session engine for a photo-dating trivia game.
//!
//! The player is shown a historical photograph taken near a chosen location and
//! guesses the year it was taken. This crate holds the pure, synchronous part of
//! the game:
//!
//! - [`core`] - value types: coordinates, locations, photos and their capture years
//! - [`engine`] - scoring, the photo deck and the session state machine
//! - [`search`] - the request/response contract of the photo search service
//!
//! The session state machine never performs I/O. [`SessionState::reduce`] applies
//! one [`Action`] and returns the ordered list of [`Command`]s an outer driver has
//! to execute (fetching photos, persisting the last seen photo, starting timers).

pub use self::{core::*, engine::*, search::*};

pub mod core;
pub mod engine;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cannot draw a photo from an empty deck")]
pub struct EmptyDeckError;
