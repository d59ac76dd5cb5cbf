use std::path::PathBuf;

use async_trait::async_trait;
use futures::{StreamExt as _, stream};
use photoguessr_runtime::ImagePrefetcher;
use tracing::{debug, warn};

use crate::{ImageCache, Result};

const CONCURRENCY: usize = 4;

/// Downloads images into an [`ImageCache`], skipping those already cached.
#[derive(Debug, Clone)]
pub struct HttpPrefetcher {
    client: reqwest::Client,
    cache: ImageCache,
}

impl HttpPrefetcher {
    #[must_use]
    pub fn new(client: reqwest::Client, cache: ImageCache) -> Self {
        Self { client, cache }
    }

    async fn fetch(&self, url: &str) -> Result<PathBuf> {
        if let Some(path) = self.cache.cached(url) {
            return Ok(path);
        }
        let resp = self.client.get(url).send().await?.error_for_status()?;
        let bytes = resp.bytes().await?;
        Ok(self.cache.store(url, bytes).await?)
    }
}

#[async_trait]
impl ImagePrefetcher for HttpPrefetcher {
    async fn prefetch(&self, urls: Vec<String>) {
        let requested = urls.len();
        let cached = stream::iter(urls)
            .map(|url| async move {
                let result = self.fetch(&url).await;
                (url, result)
            })
            .buffer_unordered(CONCURRENCY)
            .fold(0_usize, |cached, (url, result)| async move {
                match result {
                    Ok(path) => {
                        debug!(%url, path = %path.display(), "image cached");
                        cached + 1
                    }
                    Err(e) => {
                        warn!(%url, error = %e, "failed to prefetch image");
                        cached
                    }
                }
            })
            .await;
        debug!(requested, cached, "image prefetch finished");
    }
}
