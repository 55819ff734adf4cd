//! Unit tests for CLI types

use super::*;
use crate::error::SyncError;

#[test]
fn test_league_id_default_is_premier_league() {
    assert_eq!(LeagueId::default().as_u32(), 39);
}

#[test]
fn test_league_id_from_str() {
    let league_id: LeagueId = "140".parse().unwrap();
    assert_eq!(league_id, LeagueId::new(140));
    assert_eq!(league_id.to_string(), "140");

    let padded: LeagueId = " 78 ".parse().unwrap();
    assert_eq!(padded.as_u32(), 78);
}

#[test]
fn test_league_id_from_str_invalid() {
    let result = "premier".parse::<LeagueId>();
    assert!(matches!(result, Err(SyncError::InvalidNumber(_))));

    let negative = "-1".parse::<LeagueId>();
    assert!(negative.is_err());
}

#[test]
fn test_season_default_and_parse() {
    assert_eq!(Season::default(), Season::new(2024));

    let season: Season = "2023".parse().unwrap();
    assert_eq!(season.as_u16(), 2023);
    assert_eq!(season.to_string(), "2023");

    assert!("twenty".parse::<Season>().is_err());
}

#[test]
fn test_team_id_serde_is_transparent() {
    let id: TeamId = serde_json::from_str("42").unwrap();
    assert_eq!(id, TeamId::new(42));
    assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    assert_eq!(id.to_string(), "42");
}

#[test]
fn test_team_id_ordering() {
    let mut ids = vec![TeamId::new(50), TeamId::new(33), TeamId::new(40)];
    ids.sort();
    assert_eq!(ids, vec![TeamId::new(33), TeamId::new(40), TeamId::new(50)]);
}
