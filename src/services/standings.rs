use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::AppConfig;
use crate::domain::TournamentId;
use crate::provider::TournamentProvider;
use crate::report;
use crate::standings::{self, Ranking};

pub struct StandingsService<P: TournamentProvider> {
    provider: P,
    config: AppConfig,
}

impl<P: TournamentProvider> StandingsService<P> {
    pub fn new(provider: P, config: AppConfig) -> Self {
        Self { provider, config }
    }

    pub fn compute(&self, tournament_id: TournamentId) -> Result<Ranking> {
        info!("Computing standings for tournament {}", tournament_id);

        let tournament = self.provider.fetch_tournament(tournament_id)?;
        let ranking = standings::compute(&tournament)
            .with_context(|| format!("Failed to rank tournament {}", tournament_id))?;

        self.report_ties(&ranking);
        info!(
            "  → Ranked {} participants into {} places",
            ranking.len(),
            ranking.standings.last().map(|s| s.rank + 1).unwrap_or(0)
        );
        Ok(ranking)
    }

    pub fn results(&self, tournament_id: TournamentId) -> Result<String> {
        let tournament = self.provider.fetch_tournament(tournament_id)?;
        let ranking = standings::compute(&tournament)
            .with_context(|| format!("Failed to rank tournament {}", tournament_id))?;
        self.report_ties(&ranking);

        Ok(report::render_results(
            &tournament.name,
            &ranking.standings,
            &self.config.report,
        ))
    }

    pub fn table(&self, ranking: &Ranking) -> String {
        report::render_table(&ranking.standings, &self.config.report)
    }

    fn report_ties(&self, ranking: &Ranking) {
        if !ranking.ties.is_empty() {
            warn!(
                "{} unresolved tie(s) after all tie-breaks",
                ranking.ties.len()
            );
        }
    }
}
