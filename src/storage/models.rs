//! Data models for the storage layer

use crate::TeamId;
use serde::{Deserialize, Serialize};

/// One row of the `standings` table, keyed by `team_id`.
///
/// A later fetch for the same team replaces the whole row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub team_id: TeamId,
    pub team_name: String,
    pub rank: i64,
    pub points: i64,
    pub goals_diff: i64,
    /// Recent results, e.g. `"WWDLW"`; empty when the API has none.
    pub form: String,
    pub played: i64,
    pub win: i64,
    pub draw: i64,
    pub lose: i64,
}
