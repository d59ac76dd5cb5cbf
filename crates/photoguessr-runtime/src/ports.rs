//! Boundaries between the session driver and the outside world.

use std::sync::Arc;

use async_trait::async_trait;
use photoguessr_engine::{FetchError, FetchRequest, FetchResponse};
use serde_json::Value;

use crate::StoreError;

/// Searches photos taken near a coordinate.
#[async_trait]
pub trait PhotoSearch: Send + Sync {
    async fn search(&self, request: FetchRequest) -> Result<FetchResponse, FetchError>;
}

/// String-keyed storage of JSON values that survives restarts.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Returns `None` if nothing was stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;
}

/// Opportunistically warms an image cache. Failures are the implementor's to log.
#[async_trait]
pub trait ImagePrefetcher: Send + Sync {
    async fn prefetch(&self, urls: Vec<String>);
}

/// Prefetcher for front ends that never show images.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPrefetcher;

#[async_trait]
impl ImagePrefetcher for NoopPrefetcher {
    async fn prefetch(&self, _urls: Vec<String>) {}
}

#[async_trait]
impl<T> PhotoSearch for Arc<T>
where
    T: PhotoSearch + ?Sized,
{
    async fn search(&self, request: FetchRequest) -> Result<FetchResponse, FetchError> {
        (**self).search(request).await
    }
}

#[async_trait]
impl<T> PreferenceStore for Arc<T>
where
    T: PreferenceStore + ?Sized,
{
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        (**self).set(key, value).await
    }
}

#[async_trait]
impl<T> ImagePrefetcher for Arc<T>
where
    T: ImagePrefetcher + ?Sized,
{
    async fn prefetch(&self, urls: Vec<String>) {
        (**self).prefetch(urls).await;
    }
}

/// The adapters a [`Runtime`](crate::Runtime) executes commands against.
#[derive(Clone)]
pub struct Ports {
    pub search: Arc<dyn PhotoSearch>,
    pub store: Arc<dyn PreferenceStore>,
    pub prefetcher: Arc<dyn ImagePrefetcher>,
}

impl Ports {
    pub fn new(
        search: impl PhotoSearch + 'static,
        store: impl PreferenceStore + 'static,
        prefetcher: impl ImagePrefetcher + 'static,
    ) -> Self {
        Self {
            search: Arc::new(search),
            store: Arc::new(store),
            prefetcher: Arc::new(prefetcher),
        }
    }
}
