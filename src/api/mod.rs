//! API-Football standings endpoint: request and response handling.

pub mod http;
pub mod types;

pub use http::{build_client, fetch_standings, standings_url};
pub use types::{extract_rows, extract_standings, StandingEntry, StandingsEnvelope};
