//! Live adapters for the PastVu historical photo archive.
//!
//! [`PastvuClient`] answers photo searches through `photo.giveNearestPhotos`;
//! [`HttpPrefetcher`] downloads upcoming images into an [`ImageCache`] so that
//! a round can show them from disk.

pub use self::{
    cache::ImageCache,
    client::{DEFAULT_BASE_URL, PastvuClient},
    error::{PastvuError, Result},
    prefetch::HttpPrefetcher,
};

mod cache;
mod client;
mod error;
pub mod model;
mod prefetch;
