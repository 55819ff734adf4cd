//! Football Standings Sync Library
//!
//! Fetches a league table from API-Football (via RapidAPI) and upserts it
//! into a local SQLite `standings` table, one row per team.
//!
//! ## Pipeline
//!
//! 1. **Configuration**: [`SyncConfig::from_env`] reads `API_KEY`, `API_HOST`
//!    and the optional `DB_*` variables once.
//! 2. **Fetch**: a single GET to `/v3/standings?league=..&season=..`.
//! 3. **Extract**: `response[0].league.standings[0]`, flattened into
//!    [`StandingRow`]s in API order.
//! 4. **Load**: every row is upserted by `team_id` inside one transaction.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use standings_sync::{commands::sync::*, SyncConfig};
//!
//! # async fn example() -> standings_sync::Result<()> {
//! let config = SyncConfig::from_env()?;
//! let outcome = run_sync(&config, &SyncParams::default()).await?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export API_KEY=your-rapidapi-key
//! export API_HOST=api-football-v1.p.rapidapi.com
//! export DB_NAME=football_db   # optional
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{LeagueId, Season, TeamId};
pub use config::SyncConfig;
pub use error::{Result, SyncError};
pub use storage::{StandingRow, StandingsDatabase};
