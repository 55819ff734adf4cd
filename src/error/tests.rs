//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod sync_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Create a real HTTP error by making a request to an invalid URL
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let sync_error = SyncError::from(reqwest_error);

        match sync_error {
            SyncError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
        assert!(sync_error.is_network());
        assert!(!sync_error.is_fatal());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let sync_error = SyncError::from(json_error);

        match sync_error {
            SyncError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
        assert!(sync_error.is_network());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let sync_error = SyncError::from(io_error);

        match sync_error {
            SyncError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let sync_error = SyncError::from(header_error);

        match sync_error {
            SyncError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let sync_error = SyncError::from(parse_error);

        match sync_error {
            SyncError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_config_error_is_fatal() {
        let error = SyncError::Config {
            var: "API_KEY".to_string(),
        };

        assert!(error.is_fatal());
        assert!(!error.is_network());
        assert_eq!(
            error.to_string(),
            "API_KEY not found in environment variables"
        );
    }

    #[test]
    fn test_database_error_keeps_context() {
        let inner = anyhow::anyhow!("no such table: standings").context("Failed to upsert row");
        let error = SyncError::Database(inner);

        let message = error.to_string();
        assert!(message.starts_with("Database error"));
        assert!(message.contains("Failed to upsert row"));
        assert!(message.contains("no such table"));
        assert!(!error.is_fatal());
        assert!(!error.is_network());
    }

    #[test]
    fn test_error_debug_format() {
        let error = SyncError::NoCacheDir;
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("NoCacheDir"));
    }
}
