use std::{
    env,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, bail};
use pastvu_client::{HttpPrefetcher, PastvuClient};
use photoguessr_engine::{City, Coordinate, GameLocation, GameRules, SessionSeed, SessionState};
use photoguessr_runtime::{Ports, Preferences, Runtime, RuntimeConfig, UserSettings};
use tracing::{info, warn};

use self::app::TerminalApp;
use crate::{record::SessionRecord, util};

mod app;
mod input;

const API_URL_ENV: &str = "PASTVU_API_URL";

#[derive(Debug, Clone, clap::Parser)]
pub(crate) struct PlayArg {
    /// Play around a built-in city (see `cities`); defaults to the last played location
    #[clap(long, conflicts_with_all = ["lat", "long"])]
    city: Option<String>,
    /// Latitude of a custom location
    #[clap(long, requires = "long", allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Longitude of a custom location
    #[clap(long, requires = "lat", allow_negative_numbers = true)]
    long: Option<f64>,
    /// Path to a game rules file (JSON format); missing fields use the defaults
    #[clap(long)]
    rules: Option<PathBuf>,
    /// Number of rounds, overriding the rules file
    #[clap(long)]
    rounds: Option<u32>,
    /// Seed for the photo draws (32 hex digits)
    #[clap(long)]
    seed: Option<SessionSeed>,
    /// Base URL of the PastVu API
    #[clap(long, env = API_URL_ENV, default_value = pastvu_client::DEFAULT_BASE_URL)]
    api_url: String,
    /// Save the session result to a file when the session ends
    #[clap(long)]
    save_result: bool,
    /// Directory to save result files [default: <data-dir>/results]
    #[clap(long)]
    record_dir: Option<PathBuf>,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            city: None,
            lat: None,
            long: None,
            rules: None,
            rounds: None,
            seed: None,
            api_url: env::var(API_URL_ENV)
                .unwrap_or_else(|_| pastvu_client::DEFAULT_BASE_URL.to_owned()),
            save_result: false,
            record_dir: None,
        }
    }
}

pub(crate) async fn run(data_dir: &Path, arg: &PlayArg) -> anyhow::Result<()> {
    let store = util::open_preferences(data_dir);
    let preferences = Preferences::new(store.clone());

    let rules = load_rules(arg)?;
    let location = resolve_location(arg, &preferences).await?;
    if let Err(e) = preferences.save_location(&location).await {
        warn!(error = %e, "failed to remember location");
    }
    let settings = preferences.load_settings().await.unwrap_or_else(|e| {
        warn!(error = %e, "failed to load settings, using defaults");
        UserSettings::default()
    });

    let pastvu = PastvuClient::new(&arg.api_url).context("Failed to build HTTP client")?;
    let images = util::image_cache(data_dir);
    let prefetcher = HttpPrefetcher::new(pastvu.http_client().clone(), images.clone());
    let ports = Ports {
        search: Arc::new(pastvu),
        store,
        prefetcher: Arc::new(prefetcher),
    };
    let mut runtime = Runtime::new(ports, RuntimeConfig::default());
    let mut app = TerminalApp::new(
        settings.color_scheme,
        runtime.config().image_base_url.clone(),
        images,
    );

    let mut state = match arg.seed {
        Some(seed) => SessionState::with_seed(location, rules, seed),
        None => SessionState::new(location, rules),
    };
    info!(
        location = %state.location().name,
        location_id = %state.location().id(),
        rounds = state.mode().max(),
        seed = %state.seed(),
        "starting session"
    );

    match runtime.run(&mut state, &mut app).await {
        Some(closed) => println!("Thanks for playing! Final score: {}", closed.final_score),
        None => println!("Session ended with {} points.", state.score()),
    }

    if arg.save_result && !state.rounds().is_empty() {
        let record_dir = arg
            .record_dir
            .clone()
            .unwrap_or_else(|| data_dir.join("results"));
        let path = SessionRecord::from_state(&state).save(&record_dir)?;
        println!("Result saved to {}", path.display());
    }

    Ok(())
}

fn load_rules(arg: &PlayArg) -> anyhow::Result<GameRules> {
    let mut rules: GameRules = match &arg.rules {
        Some(path) => util::read_json_file("rules", path)?,
        None => GameRules::default(),
    };
    if let Some(rounds) = arg.rounds {
        rules.max_rounds = rounds;
    }
    rules.validate().context("Invalid game rules")?;
    Ok(rules)
}

async fn resolve_location(
    arg: &PlayArg,
    preferences: &Preferences,
) -> anyhow::Result<GameLocation> {
    if let (Some(lat), Some(long)) = (arg.lat, arg.long) {
        let coordinate = Coordinate::new(lat, long)?;
        return Ok(GameLocation::new(coordinate, format!("{lat:.4}, {long:.4}")));
    }
    if let Some(name) = &arg.city {
        let Some(city) = City::find(name) else {
            let known: Vec<_> = City::ALL.iter().map(|c| c.name).collect();
            bail!("Unknown city {name:?}, expected one of: {}", known.join(", "));
        };
        return Ok(city.location());
    }
    match preferences.load_location().await {
        Ok(Some(location)) => return Ok(location),
        Ok(None) => {}
        Err(e) => warn!(error = %e, "failed to load last played location"),
    }
    Ok(City::ALL[0].location())
}
