use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::{config::ApiConfig, core::rapidapi_header_map, LeagueId, Result, Season};


/// Path of the standings endpoint, relative to the API base URL.
pub const STANDINGS_PATH: &str = "/v3/standings";

/// Build the HTTP client used for the fetch.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("standings-sync/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Full URL of the standings endpoint for a given base URL.
pub fn standings_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), STANDINGS_PATH)
}

/// Fetch the standings of one league/season.
///
/// Returns the raw JSON body on a 2xx response. Transport failures, non-2xx
/// statuses and non-JSON bodies all surface as errors.
pub async fn fetch_standings(
    client: &Client,
    api: &ApiConfig,
    league: LeagueId,
    season: Season,
) -> Result<Value> {
    let url = standings_url(&api.base_url);
    let headers = rapidapi_header_map(&api.key, &api.host)?;
    let params = [
        ("league", league.to_string()),
        ("season", season.to_string()),
    ];

    debug!(%url, %league, %season, "requesting standings");

    let res = client
        .get(&url)
        .headers(headers)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}
