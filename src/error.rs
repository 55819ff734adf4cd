//! Error types for the standings sync pipeline

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("{var} not found in environment variables")]
    Config { var: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Database error: {0:#}")]
    Database(anyhow::Error),

    #[error("Could not determine cache directory")]
    NoCacheDir,
}

impl SyncError {
    /// Configuration errors abort the process; every other error ends the
    /// current run after being logged.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SyncError::Config { .. })
    }

    /// True for failures that happen before any storage is touched.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            SyncError::Http(_) | SyncError::Json(_) | SyncError::InvalidHeader(_)
        )
    }
}
