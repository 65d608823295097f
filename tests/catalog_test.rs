use matchday_backend::league::catalog::{CatalogHandle, TeamCatalog};
use matchday_backend::models::team::GeneralPosition;

mod common;
use common::builders::sample_catalog_json;

#[test]
fn test_catalog_lists_leagues_in_order() {
    let catalog = TeamCatalog::from_json(sample_catalog_json()).unwrap();
    assert_eq!(catalog.league_keys(), vec!["test-league", "test-nations"]);
    assert_eq!(catalog.teams("test-league").map(|t| t.len()), Some(3));
    assert!(catalog.teams("unknown").is_none());
}

#[test]
fn test_find_matches_case_insensitively() {
    let catalog = TeamCatalog::from_json(sample_catalog_json()).unwrap();

    let team = catalog.find("test-league", " harbour city ").expect("team");
    assert_eq!(team.name, "Harbour City");
    assert_eq!(team.stadium.as_deref(), Some("Dockside Park"));

    let keeper = team.find_player("hc-1").expect("player");
    assert_eq!(keeper.position.general, GeneralPosition::GK);

    assert!(catalog.find("test-nations", "Harbour City").is_none());
}

#[test]
fn test_duplicate_team_names_are_rejected() {
    let raw = r#"{ "cup": [
        { "name": "Northgate", "logoUrl": "a.png" },
        { "name": "NORTHGATE", "logoUrl": "b.png" }
    ] }"#;
    assert!(TeamCatalog::from_json(raw).is_err());
}

#[test]
fn test_malformed_catalog_is_rejected() {
    assert!(TeamCatalog::from_json(r#"{ "cup": [ { "logoUrl": "a.png" } ] }"#).is_err());
    assert!(TeamCatalog::from_json("not json").is_err());
}

#[test]
fn test_handle_reports_missing_file() {
    let handle = CatalogHandle::new("configuration/does-not-exist.json");
    assert!(handle.get().is_err());
}

#[test]
fn test_bundled_catalog_loads() {
    let handle = CatalogHandle::new("configuration/teams.json");
    let catalog = handle.get().expect("bundled catalog");
    assert!(catalog.find("premier-league", "Arsenal").is_some());
}
