pub mod file;
pub mod memory;

pub use file::JsonFileProvider;
pub use memory::InMemoryProvider;

use anyhow::Result;

use crate::domain::{TournamentData, TournamentId};

/// Source of already-completed tournament data
pub trait TournamentProvider {
    fn fetch_tournament(&self, tournament_id: TournamentId) -> Result<TournamentData>;
}
