//! Async driver for [`photoguessr_engine::SessionState`].
//!
//! The engine reduces actions into commands; this crate executes them. Photo
//! search, preference persistence and image prefetching are reached through the
//! port traits in [`ports`], so that live adapters and test fakes plug in the same
//! way.

pub use self::{
    app::App,
    config::RuntimeConfig,
    error::{RuntimeError, StoreError},
    ledger::SeenLedger,
    ports::{ImagePrefetcher, NoopPrefetcher, PhotoSearch, Ports, PreferenceStore},
    preferences::{ColorScheme, Preferences, UserSettings},
    runtime::{Dispatcher, Runtime},
    store::{JsonFilePreferenceStore, MemoryPreferenceStore},
};

mod app;
mod config;
mod error;
mod event;
mod ledger;
pub mod ports;
mod preferences;
mod runtime;
mod store;
