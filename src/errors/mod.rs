use thiserror::Error;

use crate::domain::ParticipantId;

/// Input-consistency failures that abort a standings computation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StandingsError {
    #[error(
        "match {match_id} references participant {participant_id}, which is not in the tournament"
    )]
    UnknownParticipant {
        match_id: i64,
        participant_id: ParticipantId,
    },

    #[error("participant {participant_id} is listed more than once")]
    DuplicateParticipant { participant_id: ParticipantId },

    #[error("match {match_id} has malformed score {score:?}, expected \"<int>-<int>\"")]
    MalformedScore { match_id: i64, score: String },

    #[error("match {match_id} pushes game wins of participant {participant_id} past the limit")]
    GameWinsOverflow {
        match_id: i64,
        participant_id: ParticipantId,
    },

    #[error("scoring weight {setting} has invalid value {value:?}")]
    InvalidWeight { setting: &'static str, value: String },
}

/// Add context to provider errors
pub fn fetch_context(tournament_id: i64) -> String {
    format!("Failed to fetch tournament {}", tournament_id)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}
