//! The standings sync pipeline.
//!
//! `Fetching → Extracting → Loading → Committed`, with `Skipped` when the API
//! has no standings and `Failed` on any stage error. No stage is retried.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::{
    api::{build_client, extract_rows, fetch_standings, StandingsEnvelope},
    cli::SyncArgs,
    config::SyncConfig,
    storage::{StandingRow, StandingsDatabase},
    LeagueId, Result, Season, SyncError,
};


/// Parameters for one sync run
#[derive(Debug, Clone)]
pub struct SyncParams {
    pub league: LeagueId,
    pub season: Season,
    /// Stop after printing the preview; never touch the database.
    pub dry_run: bool,
    pub preview: usize,
    pub as_json: bool,
    /// Overrides the path derived from the database config.
    pub db_path: Option<PathBuf>,
}

impl Default for SyncParams {
    fn default() -> Self {
        Self {
            league: LeagueId::default(),
            season: Season::default(),
            dry_run: false,
            preview: 5,
            as_json: false,
            db_path: None,
        }
    }
}

impl From<SyncArgs> for SyncParams {
    fn from(args: SyncArgs) -> Self {
        Self {
            league: args.league,
            season: args.season,
            dry_run: args.dry_run,
            preview: args.preview,
            as_json: args.json,
            db_path: args.db_path,
        }
    }
}

/// How a run that did not fail ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Rows were upserted and committed.
    Committed { rows: usize, path: PathBuf },
    /// Dry run: rows were extracted and printed only.
    Previewed { rows: usize },
    /// The API returned no standings; storage was not touched.
    Skipped,
}

/// Run the pipeline and report the outcome on the console.
///
/// Stage failures are logged here and end the run normally; only errors
/// the caller must abort on are returned.
pub async fn handle_sync(config: &SyncConfig, params: SyncParams) -> Result<Option<SyncOutcome>> {
    match run_sync(config, &params).await {
        Ok(outcome) => {
            match &outcome {
                SyncOutcome::Committed { rows, path } => {
                    info!(rows, path = %path.display(), "✅ Standings saved successfully");
                }
                SyncOutcome::Previewed { rows } => {
                    info!(rows, "Dry run: database left untouched");
                }
                SyncOutcome::Skipped => info!("No standings data found."),
            }
            Ok(Some(outcome))
        }
        Err(e) if e.is_fatal() => Err(e),
        Err(e @ SyncError::Database(_)) => {
            error!("{e}");
            Ok(None)
        }
        Err(e) if e.is_network() => {
            error!("Error fetching data: {e}");
            Ok(None)
        }
        Err(e) => {
            error!("Sync failed: {e}");
            Ok(None)
        }
    }
}

/// Fetch, extract and (unless dry-running) load one league's standings.
pub async fn run_sync(config: &SyncConfig, params: &SyncParams) -> Result<SyncOutcome> {
    let client = build_client()?;

    info!(league = %params.league, season = %params.season, "Fetching standings");
    let body = fetch_standings(&client, &config.api, params.league, params.season).await?;
    info!("API request successful.");

    report_api_errors(&body);

    let Some(rows) = extract_rows(&body)? else {
        return Ok(SyncOutcome::Skipped);
    };

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if params.preview > 0 {
        print!("{}", render_preview(&rows, params.preview));
    }

    if params.dry_run {
        return Ok(SyncOutcome::Previewed { rows: rows.len() });
    }

    let path = match &params.db_path {
        Some(path) => path.clone(),
        None => config.database.database_path()?,
    };

    info!(
        path = %path.display(),
        user = %config.database.user,
        "Connecting to database"
    );
    let written = load_standings(&path, &rows)?;

    Ok(SyncOutcome::Committed {
        rows: written,
        path,
    })
}

/// Upsert rows into the database at `path`.
///
/// The connection is closed whether or not the writes succeed.
pub fn load_standings(path: &Path, rows: &[StandingRow]) -> Result<usize> {
    let mut db = StandingsDatabase::open(path).map_err(SyncError::Database)?;

    let written = db.upsert_standings(rows);
    let closed = db.close();
    info!("🔌 Database connection closed.");

    let written = written.map_err(SyncError::Database)?;
    closed.map_err(SyncError::Database)?;
    Ok(written)
}

/// API-Football reports key and quota problems inside a 200 response.
fn report_api_errors(body: &Value) {
    if let Ok(envelope) = StandingsEnvelope::deserialize(body) {
        for message in envelope.error_messages() {
            warn!("API reported: {message}");
        }
    }
}

/// Render the first `limit` rows as a fixed-width table.
pub fn render_preview(rows: &[StandingRow], limit: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}  {}",
        "Rank", "Team", "P", "W", "D", "L", "GD", "Pts", "Form"
    );
    for r in rows.iter().take(limit) {
        let _ = writeln!(
            out,
            "{:>4}  {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}  {}",
            r.rank,
            truncate(&r.team_name, 24),
            r.played,
            r.win,
            r.draw,
            r.lose,
            r.goals_diff,
            r.points,
            r.form
        );
    }
    if rows.len() > limit {
        let _ = writeln!(out, "... {} more", rows.len() - limit);
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(max.saturating_sub(1)).collect();
        t.push('…');
        t
    }
}
