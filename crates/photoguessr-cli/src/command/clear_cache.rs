use std::path::Path;

use anyhow::Context;

use crate::util;

pub(crate) async fn run(data_dir: &Path) -> anyhow::Result<()> {
    let cache = util::image_cache(data_dir);
    let removed = cache
        .clear()
        .await
        .with_context(|| format!("Failed to clear image cache in {}", cache.dir().display()))?;
    println!("Removed {removed} cached images.");
    Ok(())
}
