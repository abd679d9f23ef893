use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use super::TournamentProvider;
use crate::domain::{TournamentData, TournamentEnvelope, TournamentId};
use crate::errors::{fetch_context, parse_context};

/// Reads Challonge tournament documents saved as `<data_dir>/<id>.json`
pub struct JsonFileProvider {
    data_dir: PathBuf,
}

impl JsonFileProvider {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    // --- Helper Methods ---

    fn build_path(&self, tournament_id: TournamentId) -> PathBuf {
        self.data_dir.join(format!("{}.json", tournament_id))
    }

    fn read_envelope(&self, path: &Path) -> Result<TournamentEnvelope> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read tournament file {}", path.display()))?;

        serde_json::from_str(&json).with_context(|| {
            format!(
                "{} from {}. First 200 chars: {}",
                parse_context("tournament JSON"),
                path.display(),
                json.chars().take(200).collect::<String>()
            )
        })
    }
}

impl TournamentProvider for JsonFileProvider {
    fn fetch_tournament(&self, tournament_id: TournamentId) -> Result<TournamentData> {
        let path = self.build_path(tournament_id);
        debug!("Loading tournament {} from {}", tournament_id, path.display());

        let envelope = self
            .read_envelope(&path)
            .with_context(|| fetch_context(tournament_id))?;
        let data = envelope.tournament.into_tournament_data()?;

        info!(
            "Loaded tournament {} ({} participants, {} matches)",
            data.name,
            data.participants.len(),
            data.matches.len()
        );
        Ok(data)
    }
}
