use std::collections::HashMap;

use anyhow::{Result, anyhow};

use super::TournamentProvider;
use crate::domain::{TournamentData, TournamentId};

/// Tournaments held in memory, indexed by ID
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    tournaments: HashMap<TournamentId, TournamentData>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, tournament: TournamentData) {
        self.tournaments.insert(tournament.id, tournament);
    }
}

impl TournamentProvider for InMemoryProvider {
    fn fetch_tournament(&self, tournament_id: TournamentId) -> Result<TournamentData> {
        self.tournaments
            .get(&tournament_id)
            .cloned()
            .ok_or_else(|| anyhow!("Tournament {} not found", tournament_id))
    }
}
