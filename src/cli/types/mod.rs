//! Type-safe wrappers for the identifiers the standings API is queried with.

pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

pub use ids::{LeagueId, TeamId};
pub use time::Season;
