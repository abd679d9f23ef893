pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod provider;
pub mod report;
pub mod services;
pub mod standings;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::config::AppConfig;
use crate::provider::JsonFileProvider;
use crate::services::StandingsService;

pub fn interpret() -> Cli {
    Cli::parse()
}

fn build_service(data_dir: Option<PathBuf>) -> StandingsService<JsonFileProvider> {
    let config = match data_dir {
        Some(dir) => AppConfig::new().with_data_dir(dir),
        None => AppConfig::new(),
    };
    let provider = JsonFileProvider::new(&config.provider.data_dir);
    StandingsService::new(provider, config)
}

pub fn handle_standings(data_dir: Option<PathBuf>, tournament_id: i64, json: bool) -> Result<()> {
    let service = build_service(data_dir);
    let ranking = service.compute(tournament_id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ranking.standings)?);
    } else {
        println!("{}", service.table(&ranking));
    }
    Ok(())
}

pub fn handle_results(data_dir: Option<PathBuf>, tournament_id: i64) -> Result<()> {
    let service = build_service(data_dir);
    println!("{}", service.results(tournament_id)?);
    Ok(())
}
