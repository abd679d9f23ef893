use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

pub use crate::domain::ParticipantId;

/// A participant's aggregated record plus its display rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub id: ParticipantId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub game_wins: u32,
    pub game_ties: u32,
    /// Zero-based; tied standings share a value
    pub rank: usize,
}

impl Standing {
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            wins: 0,
            losses: 0,
            ties: 0,
            game_wins: 0,
            game_ties: 0,
            rank: 0,
        }
    }

    pub fn record(&self) -> String {
        format!("{}-{}-{}", self.wins, self.losses, self.ties)
    }
}

/// Who beat whom, head-to-head. Lives for one computation only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefeatedBy {
    beaten: HashMap<ParticipantId, BTreeSet<ParticipantId>>,
}

impl DefeatedBy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, winner: ParticipantId, loser: ParticipantId) {
        self.beaten.entry(winner).or_default().insert(loser);
    }

    pub fn has_beaten(&self, winner: ParticipantId, loser: ParticipantId) -> bool {
        self.beaten
            .get(&winner)
            .is_some_and(|losers| losers.contains(&loser))
    }

    pub fn beaten_by(&self, winner: ParticipantId) -> Option<&BTreeSet<ParticipantId>> {
        self.beaten.get(&winner)
    }

    pub fn is_empty(&self) -> bool {
        self.beaten.is_empty()
    }
}

/// Two adjacent standings no tie-break could separate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieEvent {
    pub first: ParticipantId,
    pub second: ParticipantId,
    pub first_name: String,
    pub second_name: String,
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// Best to worst
    pub standings: Vec<Standing>,
    pub ties: Vec<TieEvent>,
}

impl Ranking {
    pub fn len(&self) -> usize {
        self.standings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }
}
