use std::{fmt, str::FromStr};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
    seq::SliceRandom,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{EmptyDeckError, Photo};

/// Photos of the active session that have not been presented yet.
///
/// # Drawing
///
/// Each draw removes one photo chosen uniformly at random. The remaining photos
/// keep their relative order; the deck is never reordered. Drawing until the deck
/// is empty yields every photo exactly once.
///
/// Randomness is supplied by the caller so that a session seeded with a
/// [`SessionSeed`] draws a reproducible sequence.
///
/// # Example
///
/// ```
/// use photoguessr_engine::{Photo, PhotoDeck, YearSpec};
///
/// let mut deck = PhotoDeck::default();
/// deck.populate(vec![
///     Photo::new(1, "a.jpg", "Harbour", YearSpec::Exact { year: 1950 }),
///     Photo::new(2, "b.jpg", "Square", YearSpec::Exact { year: 1930 }),
/// ]);
///
/// let mut rng = rand::rng();
/// let first = deck.draw_random(&mut rng).unwrap();
/// let second = deck.draw_random(&mut rng).unwrap();
/// assert_ne!(first.id, second.id);
/// assert!(deck.is_empty());
/// assert!(deck.draw_random(&mut rng).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoDeck {
    photos: Vec<Photo>,
}

impl PhotoDeck {
    #[must_use]
    pub fn new(photos: Vec<Photo>) -> Self {
        Self { photos }
    }

    /// Replaces the contents of the deck, keeping the order as received.
    pub fn populate(&mut self, photos: Vec<Photo>) {
        self.photos = photos;
    }

    /// Removes and returns a photo chosen uniformly at random.
    ///
    /// Callers are expected to check [`Self::is_empty`] first and end the game
    /// instead of drawing from an empty deck.
    pub fn draw_random<R>(&mut self, rng: &mut R) -> Result<Photo, EmptyDeckError>
    where
        R: Rng + ?Sized,
    {
        if self.photos.is_empty() {
            return Err(EmptyDeckError);
        }
        let index = rng.random_range(0..self.photos.len());
        Ok(self.photos.remove(index))
    }

    /// Keeps a random subset of at most `max` photos.
    ///
    /// Nothing happens if the deck already holds `max` photos or fewer. The kept
    /// photos come out in shuffled order.
    pub fn cap_random<R>(&mut self, max: usize, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        if self.photos.len() <= max {
            return;
        }
        let (kept, _) = self.photos.partial_shuffle(rng, max);
        let kept = kept.to_vec();
        self.photos = kept;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Photo> + '_ {
        self.photos.iter()
    }
}

/// Photos fetched for one session, tagged with the search request that produced
/// them. Shrinks by one photo per round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoBatch {
    pub request_id: String,
    pub deck: PhotoDeck,
}

/// Seed for deterministic deck draws.
///
/// A 128-bit seed initializing the random number generator of a session. Two
/// sessions with the same seed fed the same fetch results draw the same photos
/// in the same order, which makes sessions reproducible and tests deterministic.
///
/// Written as 32 lowercase hex digits, both by [`Display`](fmt::Display) and in
/// serialized form, and parsed back with [`FromStr`].
///
/// # Example
///
/// ```
/// use photoguessr_engine::SessionSeed;
/// use rand::Rng as _;
///
/// let seed: SessionSeed = rand::rng().random();
/// let text = seed.to_string();
/// assert_eq!(text.len(), 32);
/// assert_eq!(text.parse::<SessionSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSeed(pub(crate) [u8; 16]);

impl SessionSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid hex seed {input:?}: expected 32 hex digits")]
pub struct InvalidSeedError {
    pub input: String,
}

impl fmt::Display for SessionSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for SessionSeed {
    type Err = InvalidSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidSeedError {
            input: s.to_owned(),
        };
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| invalid())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for SessionSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SessionSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

impl Distribution<SessionSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SessionSeed {
        SessionSeed(rng.random::<u128>().to_be_bytes())
    }
}
