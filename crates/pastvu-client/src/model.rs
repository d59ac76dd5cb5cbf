//! Wire format of `photo.giveNearestPhotos`.

use photoguessr_engine::{FetchRequest, FetchResponse, PhotoId, PhotoRecord};
use serde::{Deserialize, Serialize};

/// The JSON object passed in the `params` query parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestPhotosParams {
    /// `[lat, long]`
    pub geo: [f64; 2],
    pub limit: u32,
    /// Photo to leave out of the results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub except: Option<i64>,
}

impl From<&FetchRequest> for NearestPhotosParams {
    fn from(request: &FetchRequest) -> Self {
        Self {
            geo: [request.coordinate.lat(), request.coordinate.long()],
            limit: request.limit,
            except: request.exclude_photo_id.map(|id| id.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NearestPhotosResponse {
    pub result: NearestPhotosResult,
    pub rid: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NearestPhotosResult {
    pub photos: Vec<PastvuPhoto>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PastvuPhoto {
    pub cid: i64,
    /// Image path relative to the image host.
    pub file: String,
    pub title: String,
    pub year: i32,
    /// Upper bound of the capture year, if only a range is known.
    #[serde(default)]
    pub year2: Option<i32>,
}

impl From<PastvuPhoto> for PhotoRecord {
    fn from(photo: PastvuPhoto) -> Self {
        Self {
            id: PhotoId(photo.cid),
            image_ref: photo.file,
            title: photo.title,
            capture_year: photo.year,
            capture_year_upper_bound: photo.year2,
        }
    }
}

impl From<NearestPhotosResponse> for FetchResponse {
    fn from(response: NearestPhotosResponse) -> Self {
        Self {
            request_id: response.rid,
            photos: response
                .result
                .photos
                .into_iter()
                .map(PhotoRecord::from)
                .collect(),
        }
    }
}
