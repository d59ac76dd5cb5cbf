use std::time::Duration;

use async_trait::async_trait;
use photoguessr_engine::{FetchError, FetchRequest, FetchResponse};
use photoguessr_runtime::PhotoSearch;
use tracing::debug;

use crate::{
    PastvuError, Result,
    model::{NearestPhotosParams, NearestPhotosResponse},
};

pub const DEFAULT_BASE_URL: &str = "https://pastvu.com";

const NEAREST_PHOTOS_METHOD: &str = "photo.giveNearestPhotos";

pub struct PastvuClient {
    client: reqwest::Client,
    base_url: String,
}

impl PastvuClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// The underlying HTTP client, for sharing its connection pool.
    #[must_use]
    pub fn http_client(&self) -> &reqwest::Client {
        &self.client
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/api2", self.base_url)
    }

    /// Fetch photos nearest to `params.geo`.
    pub async fn nearest_photos(
        &self,
        params: &NearestPhotosParams,
    ) -> Result<NearestPhotosResponse> {
        let params = serde_json::to_string(params)?;
        let resp = self
            .client
            .get(self.endpoint())
            .query(&[("method", NEAREST_PHOTOS_METHOD), ("params", params.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(PastvuError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PhotoSearch for PastvuClient {
    async fn search(&self, request: FetchRequest) -> std::result::Result<FetchResponse, FetchError> {
        let params = NearestPhotosParams::from(&request);
        debug!(geo = ?params.geo, limit = params.limit, except = ?params.except, "querying pastvu");
        let response = self.nearest_photos(&params).await?;
        Ok(response.into())
    }
}
