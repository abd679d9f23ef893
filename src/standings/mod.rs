pub mod aggregation;
pub mod comparator;
pub mod ranking;
pub mod types;

pub use aggregation::aggregate;
pub use comparator::compare;
pub use ranking::rank;
pub use types::{DefeatedBy, ParticipantId, Ranking, Standing, TieEvent};

use crate::domain::TournamentData;
use crate::errors::StandingsError;

/// Aggregates then ranks one tournament. Nothing is shared between calls.
pub fn compute(tournament: &TournamentData) -> Result<Ranking, StandingsError> {
    let (standings, defeated_by) = aggregate(&tournament.participants, &tournament.matches)?;
    Ok(rank(standings, &defeated_by, &tournament.weights))
}
