use std::sync::Arc;

use photoguessr_engine::PhotoId;
use tracing::{debug, warn};

use crate::PreferenceStore;

const LAST_SEEN_KEY: &str = "lastSeenPhotoId";

/// Remembers the last photo the player has seen, so that the next search can
/// exclude it.
///
/// Best-effort: store failures are logged and otherwise behave as if nothing had
/// been recorded.
#[derive(Clone)]
pub struct SeenLedger {
    store: Arc<dyn PreferenceStore>,
}

impl SeenLedger {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Returns the photo to exclude from the next search.
    ///
    /// `None` means no photo was ever recorded. `Some(PhotoId(0))` is a real photo.
    pub async fn load_exclude_token(&self) -> Option<PhotoId> {
        let value = match self.store.get(LAST_SEEN_KEY).await {
            Ok(value) => value?,
            Err(e) => {
                warn!(error = %e, "failed to read last seen photo");
                return None;
            }
        };
        match serde_json::from_value(value) {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(error = %e, "ignoring malformed last seen photo");
                None
            }
        }
    }

    pub async fn record(&self, photo_id: PhotoId) {
        match self.store.set(LAST_SEEN_KEY, photo_id.0.into()).await {
            Ok(()) => debug!(%photo_id, "recorded last seen photo"),
            Err(e) => warn!(%photo_id, error = %e, "failed to record last seen photo"),
        }
    }
}
