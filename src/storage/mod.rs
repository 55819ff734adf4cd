//! Storage layer for standings sync
//!
//! A thin abstraction over the SQLite database:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Upsert and read-back operations

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::StandingsDatabase;
