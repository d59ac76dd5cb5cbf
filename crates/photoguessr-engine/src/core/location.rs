use serde::{Deserialize, Serialize};

use crate::engine::PhotoBatch;

#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
#[display("coordinate components must be finite (lat: {lat}, long: {long})")]
pub struct InvalidCoordinateError {
    pub lat: f64,
    pub long: f64,
}

/// A point on Earth in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    long: f64,
}

impl Coordinate {
    pub fn new(lat: f64, long: f64) -> Result<Self, InvalidCoordinateError> {
        if !lat.is_finite() || !long.is_finite() {
            return Err(InvalidCoordinateError { lat, long });
        }
        Ok(Self { lat, long })
    }

    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    #[must_use]
    pub const fn long(&self) -> f64 {
        self.long
    }
}

/// Coarse identifier of a location, derived from its coordinate rounded to whole
/// degrees.
///
/// Distinct places less than a degree apart collide to the same identifier.
/// This is a known precision compromise, not a unique key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct LocationId(pub i64);

impl LocationId {
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_coordinate(coordinate: Coordinate) -> Self {
        let lat = coordinate.lat().round() as i64;
        let long = coordinate.long().round() as i64;
        Self(360 * lat + long)
    }
}

/// The place being played.
///
/// The photo batch is populated once per session and cleared when a new session
/// starts. It is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLocation {
    pub coordinate: Coordinate,
    pub name: String,
    #[serde(skip)]
    pub photo_batch: Option<PhotoBatch>,
}

impl GameLocation {
    #[must_use]
    pub fn new(coordinate: Coordinate, name: impl Into<String>) -> Self {
        Self {
            coordinate,
            name: name.into(),
            photo_batch: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> LocationId {
        LocationId::from_coordinate(self.coordinate)
    }
}

/// A built-in playable location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub long: f64,
}

impl City {
    pub const ALL: [City; 4] = [
        City {
            name: "San Francisco",
            lat: 37.82287,
            long: -122.474_985,
        },
        City {
            name: "Stockholm",
            lat: 59.32938,
            long: 18.06871,
        },
        City {
            name: "Chisinau",
            lat: 47.003_67,
            long: 28.907_089,
        },
        City {
            name: "Copenhagen",
            lat: 55.67594,
            long: 12.56553,
        },
    ];

    /// Looks up a built-in city by case-insensitive name.
    #[must_use]
    pub fn find(name: &str) -> Option<City> {
        Self::ALL
            .into_iter()
            .find(|city| city.name.eq_ignore_ascii_case(name.trim()))
    }

    #[must_use]
    pub fn location(&self) -> GameLocation {
        // Catalog coordinates are finite literals.
        let coordinate = Coordinate {
            lat: self.lat,
            long: self.long,
        };
        GameLocation::new(coordinate, self.name)
    }
}
