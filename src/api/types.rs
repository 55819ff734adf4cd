use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{storage::StandingRow, Result, TeamId};


/// Treat an explicit `null` like a missing field.
fn de_null_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level envelope of every API-Football response.
///
/// `response` is kept as raw values; only the first entry is ever read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingsEnvelope {
    #[serde(default, deserialize_with = "de_null_default")]
    pub response: Vec<Value>,
    /// Request-level problems (bad key, exhausted quota) come back with a 200
    /// status and are reported here as either an object or an array.
    #[serde(default)]
    pub errors: Value,
    #[serde(default)]
    pub results: Option<u32>,
}

impl StandingsEnvelope {
    /// Error messages reported by the API, flattened to strings.
    pub fn error_messages(&self) -> Vec<String> {
        match &self.errors {
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| match v {
                    Value::String(s) => format!("{k}: {s}"),
                    other => format!("{k}: {other}"),
                })
                .collect(),
            Value::Array(items) => items
                .iter()
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueEntry {
    pub league: LeagueStandings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueStandings {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub season: Option<u16>,
    /// Standings groups; most leagues have exactly one.
    #[serde(default, deserialize_with = "de_null_default")]
    pub standings: Vec<Vec<StandingEntry>>,
}

/// One team's line in a standings group
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StandingEntry {
    pub rank: i64,
    pub team: TeamRef,
    pub points: i64,
    #[serde(rename = "goalsDiff")]
    pub goals_diff: i64,
    #[serde(default)]
    pub form: Option<String>,
    pub all: MatchRecord,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamRef {
    pub id: TeamId,
    pub name: String,
}

/// Aggregate results over all matches (home and away)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct MatchRecord {
    pub played: i64,
    pub win: i64,
    pub draw: i64,
    pub lose: i64,
}

impl From<StandingEntry> for StandingRow {
    fn from(entry: StandingEntry) -> Self {
        StandingRow {
            team_id: entry.team.id,
            team_name: entry.team.name,
            rank: entry.rank,
            points: entry.points,
            goals_diff: entry.goals_diff,
            form: entry.form.unwrap_or_default(),
            played: entry.all.played,
            win: entry.all.win,
            draw: entry.all.draw,
            lose: entry.all.lose,
        }
    }
}

/// Locate `response[0].league.standings[0]` in a standings response.
///
/// Returns `Ok(None)` when there is nothing to store: `response` missing,
/// null or empty, or the first league carrying no (or an empty) standings
/// group. Entries are returned in API order. A first league entry that does
/// not have the expected shape is a parse error.
pub fn extract_standings(body: &Value) -> Result<Option<Vec<StandingEntry>>> {
    let envelope = StandingsEnvelope::deserialize(body)?;

    let Some(first) = envelope.response.into_iter().next() else {
        return Ok(None);
    };

    let entry: LeagueEntry = serde_json::from_value(first)?;
    let group = entry.league.standings.into_iter().next().unwrap_or_default();

    if group.is_empty() {
        Ok(None)
    } else {
        Ok(Some(group))
    }
}

/// Extract standings and flatten them into table rows.
pub fn extract_rows(body: &Value) -> Result<Option<Vec<StandingRow>>> {
    Ok(extract_standings(body)?.map(|entries| entries.into_iter().map(StandingRow::from).collect()))
}
