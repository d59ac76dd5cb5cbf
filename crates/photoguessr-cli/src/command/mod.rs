use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::{play::PlayArg, settings::SettingsArg};

mod cities;
mod clear_cache;
mod play;
mod settings;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Directory holding preferences and saved results
    #[clap(long, env = "PHOTOGUESSR_DATA_DIR", default_value = "./data", global = true)]
    data_dir: PathBuf,
    /// Log debug output to stderr
    #[clap(short, long, global = true)]
    verbose: bool,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Guess the years of historical photos taken near a location
    Play(#[clap(flatten)] PlayArg),
    /// List the built-in cities
    Cities,
    /// Show or change user settings
    Settings(#[clap(flatten)] SettingsArg),
    /// Delete downloaded photos
    ClearCache,
}

pub async fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose)?;

    match args.mode.unwrap_or_else(|| Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&args.data_dir, &arg).await?,
        Mode::Cities => cities::run(&args.data_dir).await?,
        Mode::Settings(arg) => settings::run(&args.data_dir, &arg).await?,
        Mode::ClearCache => clear_cache::run(&args.data_dir).await?,
    }
    Ok(())
}

/// Logs go to stderr so that they never interleave with the game on stdout.
/// `RUST_LOG` replaces the default filter entirely.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("photoguessr={level},pastvu_client={level}"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
