use std::{
    fs::{self, File},
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::{DateTime, Utc};
use photoguessr_engine::{GameLocation, GameOverReason, RoundResult, SessionSeed, SessionState};
use serde::{Deserialize, Serialize};

/// Result of a finished session, as written by `play --save-result`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Timestamp when the record was created (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Where the photos were taken; the photo batch is never included
    pub location: GameLocation,
    /// Seed of the session's photo draws
    pub seed: SessionSeed,
    pub final_score: u32,
    /// `None` if the player left before the session ended
    pub reason: Option<GameOverReason>,
    pub rounds: Vec<RoundResult>,
}

impl SessionRecord {
    pub fn from_state(state: &SessionState) -> Self {
        Self {
            recorded_at: Utc::now(),
            location: state.location().clone(),
            seed: state.seed(),
            final_score: state.score(),
            reason: state.game_over().map(|g| g.reason),
            rounds: state.rounds().to_vec(),
        }
    }

    /// Saves the record to a JSON file and returns its path.
    ///
    /// The filename is generated from the location name and the recording
    /// timestamp: `{location}_{YYYYMMDD_HHMMSS}.json`
    ///
    /// # Arguments
    ///
    /// * `record_dir` - Directory to save the record (created if it doesn't exist)
    pub fn save(&self, record_dir: &Path) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(record_dir)
            .with_context(|| format!("Failed to create directory {}", record_dir.display()))?;

        let filename = format!(
            "{}_{}.json",
            location_slug(&self.location.name),
            self.recorded_at.format("%Y%m%d_%H%M%S")
        );
        let filepath = record_dir.join(filename);

        let file = File::create(&filepath)
            .with_context(|| format!("Failed to create file: {}", filepath.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("Failed to write JSON to {}", filepath.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush output to {}", filepath.display()))?;

        Ok(filepath)
    }
}

fn location_slug(name: &str) -> String {
    let slug = name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "location".to_owned()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use photoguessr_engine::{City, GameRules};
    use tempfile::TempDir;

    use super::*;
    use crate::util;

    #[test]
    fn test_location_slug() {
        assert_eq!(location_slug("San Francisco"), "san-francisco");
        assert_eq!(location_slug("  Chișinău / old town "), "chișinău-old-town");
        assert_eq!(location_slug("!!!"), "location");
    }

    #[test]
    fn test_save_writes_readable_record() {
        let location = City::find("San Francisco").unwrap().location();
        let state = SessionState::with_seed(
            location,
            GameRules::default(),
            SessionSeed::from_bytes([9; 16]),
        );
        let record = SessionRecord::from_state(&state);

        let dir = TempDir::new().unwrap();
        let record_dir = dir.path().join("results");
        let path = record.save(&record_dir).unwrap();
        assert!(
            path.file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("san-francisco_")
        );

        let loaded: SessionRecord = util::read_json_file("record", &path).unwrap();
        assert_eq!(loaded.seed, record.seed);
        assert_eq!(loaded.location.name, "San Francisco");
        assert_eq!(loaded.reason, None);
        assert!(loaded.rounds.is_empty());
    }
}
