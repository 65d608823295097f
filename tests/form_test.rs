use matchday_backend::league::form::{derive_team_preview, find_team_fixture, shift_form};
use matchday_backend::models::fixture::{FixtureOutcome, TeamPreviewStats};

mod common;
use common::builders::{finished_fixture, fixture};

use FixtureOutcome::{Draw as D, Loss as L, None as N, Win as W};

#[test]
fn test_full_form_drops_oldest_entry() {
    assert_eq!(shift_form(&[W, W, D, L, N], W), vec![W, D, L, N, W]);
}

#[test]
fn test_home_win_is_propagated_to_both_teams() {
    let previous = finished_fixture("Harbour City", "Valley Rovers", 3, 1);

    let home = derive_team_preview("Harbour City", &previous, None).expect("home side");
    assert_eq!(home.form, vec![N, N, N, N, W]);
    let last = home.last_fixture.expect("last fixture");
    assert_eq!(last.opponent, "Valley Rovers");
    assert!(last.was_home);
    assert_eq!((last.home_team_goals, last.away_team_goals), (3, 1));
    assert_eq!(last.outcome, W);

    let away = derive_team_preview("Valley Rovers", &previous, None).expect("away side");
    assert_eq!(away.form, vec![N, N, N, N, L]);
    assert!(!away.last_fixture.expect("last fixture").was_home);
}

#[test]
fn test_existing_stats_keep_standing_and_insights() {
    let previous = finished_fixture("Harbour City", "Valley Rovers", 1, 1);
    let current = TeamPreviewStats {
        form: vec![W, W, D, L, N],
        standing: Some(4),
        last_fixture: None,
        insights: vec!["Unbeaten at home".to_string()],
    };

    let derived = derive_team_preview("Valley Rovers", &previous, Some(&current)).expect("derived");
    assert_eq!(derived.form, vec![W, D, L, N, D]);
    assert_eq!(derived.standing, Some(4));
    assert_eq!(derived.insights, current.insights);
}

#[test]
fn test_applying_the_same_fixture_twice_does_not_shift_again() {
    let previous = finished_fixture("Harbour City", "Valley Rovers", 0, 2);
    let once = derive_team_preview("Valley Rovers", &previous, None).expect("derived");
    let twice = derive_team_preview("Valley Rovers", &previous, Some(&once)).expect("derived");

    assert_eq!(once, twice);
}

#[test]
fn test_team_not_in_fixture_yields_nothing() {
    let previous = finished_fixture("Harbour City", "Valley Rovers", 2, 2);
    assert!(derive_team_preview("Northgate", &previous, None).is_none());
}

#[test]
fn test_only_finished_fixtures_are_found() {
    let week = vec![
        fixture("Northgate", "Harbour City"),
        finished_fixture("Valley Rovers", "Northgate", 1, 0),
    ];

    assert!(find_team_fixture("Harbour City", &week).is_none());
    let found = find_team_fixture("Northgate", &week).expect("finished fixture");
    assert_eq!(found.home_team.name, "Valley Rovers");
}
