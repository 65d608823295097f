use matchday_backend::league::validation::LeagueValidator;
use matchday_backend::models::fixture::FixtureOutcome;
use chrono::{Utc, Duration};

mod common;
use common::builders::odds;

#[test]
fn test_validate_league_name() {
    let validator = LeagueValidator::new();

    // Valid names
    assert_eq!(validator.validate_league_name("  Office League ").unwrap(), "Office League");
    assert!(validator.validate_league_name("Euro 2028").is_ok());

    // Invalid names
    assert!(validator.validate_league_name("").is_err());
    assert!(validator.validate_league_name("   ").is_err());
    assert!(validator.validate_league_name(&"a".repeat(256)).is_err());
    assert!(validator.validate_league_name("!!!").is_err());
}

#[test]
fn test_validate_goals() {
    let validator = LeagueValidator::new();

    // Valid scores
    assert_eq!(validator.validate_goals(Some(2), Some(1)).unwrap(), (2, 1));
    assert_eq!(validator.validate_goals(Some(0), Some(0)).unwrap(), (0, 0));
    assert!(validator.validate_goals(Some(50), Some(0)).is_ok());

    // Invalid scores
    assert!(validator.validate_goals(None, Some(1)).is_err());
    assert!(validator.validate_goals(Some(1), None).is_err());
    assert!(validator.validate_goals(Some(-1), Some(0)).is_err());
    assert!(validator.validate_goals(Some(0), Some(-3)).is_err());
    assert!(validator.validate_goals(Some(51), Some(0)).is_err());
}

#[test]
fn test_validate_goal_scorers() {
    let validator = LeagueValidator::new();

    let scorers = vec![" Cleo Striker ".to_string(), "Ben Stopper".to_string()];
    assert_eq!(
        validator.validate_goal_scorers(&scorers, 3).unwrap(),
        vec!["Cleo Striker".to_string(), "Ben Stopper".to_string()]
    );

    // More scorers than goals
    assert!(validator.validate_goal_scorers(&scorers, 1).is_err());
    // Blank names
    assert!(validator.validate_goal_scorers(&["  ".to_string()], 1).is_err());
}

#[test]
fn test_validate_fixture_teams() {
    let validator = LeagueValidator::new();

    assert!(validator.validate_fixture_teams("Harbour City", "Valley Rovers").is_ok());
    assert!(validator.validate_fixture_teams("Harbour City", " harbour city").is_err());
}

#[test]
fn test_validate_kick_off_time() {
    let validator = LeagueValidator::new();
    let now = Utc::now();

    // Valid dates
    assert!(validator.validate_kick_off_time(now + Duration::days(3)).is_ok());
    assert!(validator.validate_kick_off_time(now - Duration::minutes(30)).is_ok());

    // Invalid dates
    assert!(validator.validate_kick_off_time(now - Duration::days(1)).is_err());
    assert!(validator.validate_kick_off_time(now + Duration::days(400)).is_err());
}

#[test]
fn test_validate_odds() {
    let validator = LeagueValidator::new();

    let cleaned = validator.validate_odds(&odds(" 1.85", "3,40 ", "4.75")).unwrap();
    assert_eq!(cleaned.home_win, "1.85");
    assert_eq!(cleaned.draw, "3,40");

    assert!(validator.validate_odds(&odds("", "3.40", "4.75")).is_err());
    assert!(validator.validate_odds(&odds("1.85", "evens", "4.75")).is_err());
    assert!(validator.validate_odds(&odds("1.85", "3.40", "0.9")).is_err());
}

#[test]
fn test_validate_form_pads_short_histories() {
    let validator = LeagueValidator::new();
    use FixtureOutcome::{Draw as D, None as N, Win as W};

    assert_eq!(validator.validate_form(&[W, D]).unwrap(), vec![N, N, N, W, D]);
    assert_eq!(validator.validate_form(&[]).unwrap(), vec![N; 5]);
    assert!(validator.validate_form(&[W, W, W, W, W, D]).is_err());
}

#[test]
fn test_validate_week_number() {
    let validator = LeagueValidator::new();

    assert!(validator.validate_week_number(1).is_ok());
    assert!(validator.validate_week_number(38).is_ok());
    assert!(validator.validate_week_number(0).is_err());
    assert!(validator.validate_week_number(101).is_err());
}

#[test]
fn test_validate_rating() {
    let validator = LeagueValidator::new();

    assert_eq!(validator.validate_rating(Some(7)).unwrap(), 7);
    assert!(validator.validate_rating(None).is_err());
    assert!(validator.validate_rating(Some(0)).is_err());
    assert!(validator.validate_rating(Some(11)).is_err());
}

#[test]
fn test_validate_pagination() {
    let validator = LeagueValidator::new();

    assert_eq!(validator.validate_pagination(None, None).unwrap(), (50, 0));
    assert_eq!(validator.validate_pagination(Some(20), Some(3)).unwrap(), (20, 40));
    assert!(validator.validate_pagination(Some(0), None).is_err());
    assert!(validator.validate_pagination(Some(1001), None).is_err());
    assert!(validator.validate_pagination(None, Some(0)).is_err());
}

#[test]
fn test_sanitize_string_input() {
    let validator = LeagueValidator::new();

    assert_eq!(validator.sanitize_string_input("  Dockside\0 Park "), "Dockside Park");
    assert!(validator.validate_and_sanitize_text("Stadium", "\0 ", 10).is_err());
}
