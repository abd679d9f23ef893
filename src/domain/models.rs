use serde::{Deserialize, Serialize};

use super::score::ScorePair;
use crate::errors::StandingsError;

pub type ParticipantId = i64;
pub type MatchId = i64;
pub type TournamentId = i64;

/// Tournament entrant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Completed match between two participants. `winner == None` is a tie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub player_a: ParticipantId,
    pub player_b: ParticipantId,
    pub winner: Option<ParticipantId>,
    pub score: ScorePair,
}

/// Points awarded per outcome, parsed once per computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub match_win: f64,
    pub match_tie: f64,
    pub game_win: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            match_win: 1.0,
            match_tie: 0.5,
            game_win: 0.0,
        }
    }
}

impl ScoringWeights {
    pub fn parse(
        match_win: &str,
        match_tie: &str,
        game_win: &str,
    ) -> Result<Self, StandingsError> {
        Ok(Self {
            match_win: parse_weight("pts_for_match_win", match_win)?,
            match_tie: parse_weight("pts_for_match_tie", match_tie)?,
            game_win: parse_weight("pts_for_game_win", game_win)?,
        })
    }

    pub fn points(&self, wins: u32, ties: u32, game_wins: u32) -> f64 {
        wins as f64 * self.match_win
            + ties as f64 * self.match_tie
            + game_wins as f64 * self.game_win
    }
}

fn parse_weight(setting: &'static str, value: &str) -> Result<f64, StandingsError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite())
        .ok_or_else(|| StandingsError::InvalidWeight {
            setting,
            value: value.to_string(),
        })
}

/// Everything the ranking core needs, already fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentData {
    pub id: TournamentId,
    pub name: String,
    pub participants: Vec<Participant>,
    pub matches: Vec<Match>,
    pub weights: ScoringWeights,
}

// --- API Response Structures ---

/// Tournament document as served by Challonge (`tournaments/{id}.json`)
#[derive(Debug, Deserialize, Serialize)]
pub struct TournamentEnvelope {
    pub tournament: TournamentResponse,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TournamentResponse {
    pub id: TournamentId,
    pub name: String,
    #[serde(default)]
    pub pts_for_match_win: String,
    #[serde(default)]
    pub pts_for_match_tie: String,
    #[serde(default)]
    pub pts_for_game_win: String,
    #[serde(default)]
    pub participants: Vec<ParticipantEnvelope>,
    #[serde(default)]
    pub matches: Vec<MatchEnvelope>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ParticipantEnvelope {
    pub participant: ParticipantResponse,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ParticipantResponse {
    pub id: ParticipantId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl ParticipantResponse {
    pub fn display_name(&self) -> String {
        self.display_name
            .as_ref()
            .filter(|s| !s.is_empty())
            .cloned()
            .unwrap_or_else(|| self.name.clone())
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MatchEnvelope {
    #[serde(rename = "match")]
    pub match_data: MatchResponse,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MatchResponse {
    pub id: MatchId,
    pub player1_id: Option<ParticipantId>,
    pub player2_id: Option<ParticipantId>,
    #[serde(default)]
    pub winner_id: Option<ParticipantId>,
    #[serde(default)]
    pub scores_csv: String,
}

impl MatchResponse {
    pub fn player_a_id(&self) -> ParticipantId {
        self.player1_id.unwrap_or(0)
    }

    pub fn player_b_id(&self) -> ParticipantId {
        self.player2_id.unwrap_or(0)
    }

    pub fn to_match(&self) -> Result<Match, StandingsError> {
        let score = self
            .scores_csv
            .parse::<ScorePair>()
            .map_err(|_| StandingsError::MalformedScore {
                match_id: self.id,
                score: self.scores_csv.clone(),
            })?;

        Ok(Match {
            id: self.id,
            player_a: self.player_a_id(),
            player_b: self.player_b_id(),
            winner: self.winner_id,
            score,
        })
    }
}

impl TournamentResponse {
    pub fn into_tournament_data(self) -> Result<TournamentData, StandingsError> {
        let weights = ScoringWeights::parse(
            &self.pts_for_match_win,
            &self.pts_for_match_tie,
            &self.pts_for_game_win,
        )?;

        let participants = self
            .participants
            .iter()
            .map(|p| Participant::new(p.participant.id, p.participant.display_name()))
            .collect();

        let matches = self
            .matches
            .iter()
            .map(|m| m.match_data.to_match())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TournamentData {
            id: self.id,
            name: self.name,
            participants,
            matches,
            weights,
        })
    }
}
