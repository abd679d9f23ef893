use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "round-robin draft standings")]
pub struct Cli {
    /// Directory holding `<id>.json` tournament documents (defaults to $TOURNAMENT_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Print ranked standings for a tournament
    Standings {
        /// Tournament ID
        #[arg(short, long)]
        tournament: i64,
        /// Print JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the end-of-tournament podium
    Results {
        /// Tournament ID
        #[arg(short, long)]
        tournament: i64,
    },
}
