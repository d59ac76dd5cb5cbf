use std::path::Path;

use photoguessr_engine::City;
use photoguessr_runtime::Preferences;
use tracing::warn;

use crate::util;

pub(crate) async fn run(data_dir: &Path) -> anyhow::Result<()> {
    let preferences = Preferences::new(util::open_preferences(data_dir));
    let saved = preferences.load_location().await.unwrap_or_else(|e| {
        warn!(error = %e, "failed to load last played location");
        None
    });

    println!("{:<16} {:>10} {:>12} {:>8}", "CITY", "LAT", "LONG", "ID");
    for city in City::ALL {
        let location = city.location();
        let marker = if saved.as_ref().is_some_and(|s| s.id() == location.id()) {
            " (last played)"
        } else {
            ""
        };
        println!(
            "{:<16} {:>10.5} {:>12.5} {:>8}{marker}",
            city.name,
            city.lat,
            city.long,
            location.id().0
        );
    }
    Ok(())
}
