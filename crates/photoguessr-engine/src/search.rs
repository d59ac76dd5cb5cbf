//! Request/response contract of the photo search service.
//!
//! The transport is not the engine's concern; a search adapter translates its own
//! wire format into these types.

use serde::{Deserialize, Serialize};

use crate::{Coordinate, Photo, PhotoId, YearSpec};

/// Asks for up to `limit` photos near `coordinate`.
///
/// `exclude_photo_id: None` means "no exclusion". It is omitted from the
/// serialized form rather than encoded as `0`, which is a valid photo id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchRequest {
    pub coordinate: Coordinate,
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_photo_id: Option<PhotoId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResponse {
    pub request_id: String,
    pub photos: Vec<PhotoRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    pub id: PhotoId,
    pub image_ref: String,
    pub title: String,
    pub capture_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_year_upper_bound: Option<i32>,
}

impl From<PhotoRecord> for Photo {
    fn from(record: PhotoRecord) -> Self {
        let capture_year =
            YearSpec::from_bounds(record.capture_year, record.capture_year_upper_bound);
        Photo {
            id: record.id,
            image_ref: record.image_ref,
            title: record.title,
            capture_year,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum FetchErrorKind {
    #[display("transport")]
    Transport,
    #[display("HTTP status {_0}")]
    Status(u16),
    #[display("decode")]
    Decode,
}

/// A failed photo search. Recoverable: the session stays without a photo until
/// the player starts it again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("photo search failed ({kind}): {message}")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
}

impl FetchError {
    #[must_use]
    pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Correlates a fetch with its completion. Completions carrying any other ticket
/// than the pending one are stale and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct FetchTicket(pub u64);

/// A fetch the driver has to perform on behalf of the session.
///
/// The exclusion token is not part of the plan: the driver reads it from the
/// seen-photo ledger right before sending the request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchPlan {
    pub ticket: FetchTicket,
    pub coordinate: Coordinate,
    pub limit: u32,
}

impl FetchPlan {
    #[must_use]
    pub fn request(&self, exclude_photo_id: Option<PhotoId>) -> FetchRequest {
        FetchRequest {
            coordinate: self.coordinate,
            limit: self.limit,
            exclude_photo_id,
        }
    }
}
