use std::{
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tokio::{fs, task};

/// Downloaded images on disk, one file per image URL.
///
/// Files are named after the last path segment of their URL, which PastVu
/// makes unique per photo.
#[derive(Debug, Clone)]
pub struct ImageCache {
    dir: PathBuf,
}

impl ImageCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where the image behind `url` is (or would be) stored.
    #[must_use]
    pub fn path_for(&self, url: &str) -> PathBuf {
        self.dir.join(file_name(url))
    }

    /// Returns the cached file for `url`, if it was downloaded before.
    #[must_use]
    pub fn cached(&self, url: &str) -> Option<PathBuf> {
        let path = self.path_for(url);
        path.is_file().then_some(path)
    }

    /// Stores `bytes` as the image behind `url`, replacing any previous copy
    /// atomically.
    pub async fn store<B>(&self, url: &str, bytes: B) -> io::Result<PathBuf>
    where
        B: AsRef<[u8]> + Send + 'static,
    {
        let dir = self.dir.clone();
        let path = self.path_for(url);
        task::spawn_blocking(move || -> io::Result<PathBuf> {
            std::fs::create_dir_all(&dir)?;
            let mut temp = NamedTempFile::new_in(&dir)?;
            temp.write_all(bytes.as_ref())?;
            temp.flush()?;
            temp.persist(&path).map_err(|e| e.error)?;
            Ok(path)
        })
        .await
        .map_err(io::Error::other)?
    }

    /// Removes every cached image and returns how many were removed.
    pub async fn clear(&self) -> io::Result<usize> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e),
        };
        let mut removed = 0;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                fs::remove_file(entry.path()).await?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}

fn file_name(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let segment = path.rsplit('/').next().unwrap_or_default();
    let name: String = segment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if name.trim_matches('.').is_empty() {
        "image".to_owned()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_file_name_uses_last_segment() {
        assert_eq!(
            file_name("https://pastvu.com/_p/d/7/b/i/7bi9g0kfwouz0oho3b.jpeg"),
            "7bi9g0kfwouz0oho3b.jpeg"
        );
        assert_eq!(file_name("https://img.test/a/b c.jpg?size=2"), "b_c.jpg");
        assert_eq!(file_name("https://img.test/"), "image");
        assert_eq!(file_name("https://img.test/.."), "image");
    }

    #[tokio::test]
    async fn test_store_then_clear() {
        let dir = TempDir::new().unwrap();
        let cache = ImageCache::new(dir.path().join("images"));
        let url = "https://img.test/d/x/1.jpg";
        assert_eq!(cache.cached(url), None);
        assert_eq!(cache.clear().await.unwrap(), 0);

        let path = cache.store(url, b"jpeg".to_vec()).await.unwrap();
        assert_eq!(cache.cached(url), Some(path.clone()));
        assert_eq!(std::fs::read(&path).unwrap(), b"jpeg");

        cache.store("https://img.test/d/x/2.jpg", vec![1, 2]).await.unwrap();
        assert_eq!(cache.clear().await.unwrap(), 2);
        assert_eq!(cache.cached(url), None);
    }
}
