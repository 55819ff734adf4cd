//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use std::path::PathBuf;
use types::{LeagueId, Season};

/// Fetch league standings from API-Football and upsert them into the
/// `standings` table.
///
/// `API_KEY` and `API_HOST` must be set (a `.env` file is honoured);
/// `DB_HOST`, `DB_USER`, `DB_PASSWORD` and `DB_NAME` are optional.
#[derive(Debug, Parser)]
#[clap(name = "standings-sync", about = "Football standings sync")]
pub struct SyncArgs {
    /// League ID to fetch (39 = Premier League).
    #[clap(long, short, default_value_t = LeagueId::default())]
    pub league: LeagueId,

    /// Season year (e.g. 2024).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Fetch and preview the standings without writing to the database.
    #[clap(long)]
    pub dry_run: bool,

    /// Number of rows to print in the preview table.
    #[clap(long, default_value_t = 5)]
    pub preview: usize,

    /// Print the extracted rows as JSON instead of a table.
    #[clap(long)]
    pub json: bool,

    /// Database file to write to, overriding `DB_HOST`/`DB_NAME`.
    #[clap(long)]
    pub db_path: Option<PathBuf>,

    /// Enable debug logging.
    #[clap(long, short)]
    pub verbose: bool,
}
