use std::path::Path;

use anyhow::Context;
use photoguessr_runtime::{ColorScheme, Preferences};

use crate::util;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SettingsArg {
    /// Set the color scheme of the game output
    #[clap(long, value_enum)]
    color_scheme: Option<ColorSchemeArg>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ColorSchemeArg {
    Dark,
    Light,
    System,
}

impl From<ColorSchemeArg> for ColorScheme {
    fn from(arg: ColorSchemeArg) -> Self {
        match arg {
            ColorSchemeArg::Dark => ColorScheme::Dark,
            ColorSchemeArg::Light => ColorScheme::Light,
            ColorSchemeArg::System => ColorScheme::System,
        }
    }
}

pub(crate) async fn run(data_dir: &Path, arg: &SettingsArg) -> anyhow::Result<()> {
    let path = util::preferences_path(data_dir);
    let preferences = Preferences::new(util::open_preferences(data_dir));
    let mut settings = preferences
        .load_settings()
        .await
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;

    if let Some(scheme) = arg.color_scheme {
        settings.color_scheme = scheme.into();
        preferences
            .save_settings(&settings)
            .await
            .with_context(|| format!("Failed to save settings to {}", path.display()))?;
    }

    println!("color scheme: {}", settings.color_scheme);
    Ok(())
}
