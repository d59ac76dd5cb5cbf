use std::sync::Arc;

use photoguessr_engine::GameLocation;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{PreferenceStore, StoreError};

const USER_SETTINGS_KEY: &str = "userSettings";
const SAVED_LOCATION_KEY: &str = "savedGameLocation";

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[display("dark")]
    Dark,
    #[display("light")]
    Light,
    /// Follow the terminal or operating system.
    #[default]
    #[display("system")]
    System,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub color_scheme: ColorScheme,
}

/// Typed access to the player's settings and the last played location.
#[derive(Clone)]
pub struct Preferences {
    store: Arc<dyn PreferenceStore>,
}

impl Preferences {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Returns the stored settings, or the defaults if none were saved.
    pub async fn load_settings(&self) -> Result<UserSettings, StoreError> {
        Ok(self.load(USER_SETTINGS_KEY).await?.unwrap_or_default())
    }

    pub async fn save_settings(&self, settings: &UserSettings) -> Result<(), StoreError> {
        self.save(USER_SETTINGS_KEY, settings).await
    }

    /// Returns the location of the last started session. Its photo batch is never
    /// persisted.
    pub async fn load_location(&self) -> Result<Option<GameLocation>, StoreError> {
        self.load(SAVED_LOCATION_KEY).await
    }

    pub async fn save_location(&self, location: &GameLocation) -> Result<(), StoreError> {
        self.save(SAVED_LOCATION_KEY, location).await
    }

    async fn load<T>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let Some(value) = self.store.get(key).await? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_value(value)?))
    }

    async fn save<T>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize + Sync,
    {
        self.store.set(key, serde_json::to_value(value)?).await
    }
}
