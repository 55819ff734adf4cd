//! HTTP utilities for API-Football communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};

pub const RAPIDAPI_KEY_HEADER: &str = "x-rapidapi-key";
pub const RAPIDAPI_HOST_HEADER: &str = "x-rapidapi-host";

/// Build the RapidAPI authentication headers from an API key and host.
///
/// Fails when either value contains characters that are not valid in a
/// header (e.g. a stray newline copied from a `.env` file).
pub fn rapidapi_header_map(key: &str, host: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut key_value = HeaderValue::from_str(key)?;
    key_value.set_sensitive(true);
    h.insert(HeaderName::from_static(RAPIDAPI_KEY_HEADER), key_value);
    h.insert(
        HeaderName::from_static(RAPIDAPI_HOST_HEADER),
        HeaderValue::from_str(host)?,
    );
    Ok(h)
}
