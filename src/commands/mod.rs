//! Command implementations for standings sync

pub mod sync;

pub use sync::{handle_sync, run_sync, SyncOutcome, SyncParams};
