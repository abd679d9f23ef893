use anyhow::Result;

use draft_standings::cli::{Cli, Command};
use draft_standings::{handle_results, handle_standings, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(cli)
}

fn execute_command(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Standings { tournament, json } => handle_standings(cli.data_dir, tournament, json),
        Command::Results { tournament } => handle_results(cli.data_dir, tournament),
    }
}
