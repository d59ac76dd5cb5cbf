use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use pastvu_client::ImageCache;
use photoguessr_runtime::JsonFilePreferenceStore;

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;
    Ok(value)
}

pub fn preferences_path(data_dir: &Path) -> PathBuf {
    data_dir.join("preferences.json")
}

pub fn open_preferences(data_dir: &Path) -> Arc<JsonFilePreferenceStore> {
    Arc::new(JsonFilePreferenceStore::new(preferences_path(data_dir)))
}

pub fn image_cache(data_dir: &Path) -> ImageCache {
    ImageCache::new(data_dir.join("images"))
}
