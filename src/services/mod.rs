pub mod standings;

pub use standings::StandingsService;
