use std::time::Duration;

/// Settings of the effect driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// How long a round notification stays up.
    pub notification_ttl: Duration,
    /// Prefix that turns an image reference into a downloadable URL.
    pub image_base_url: String,
    /// How long [`Runtime::run`](crate::Runtime::run) waits for outstanding
    /// seen-photo writes before returning.
    pub write_drain_timeout: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            notification_ttl: Duration::from_secs(5),
            image_base_url: "https://pastvu.com/_p/d/".to_owned(),
            write_drain_timeout: Duration::from_secs(2),
        }
    }
}
