use matchday_backend::league::league::resolve_scorer;
use matchday_backend::models::prediction::Prediction;
use matchday_backend::models::prediction::PredictionOutcome;
use matchday_backend::models::team::GeneralPosition;
use chrono::{Duration, Utc};
use uuid::Uuid;

mod common;
use common::builders::{fixture, player};

#[test]
fn test_prediction_outcome_follows_goals() {
    let prediction = Prediction::new(Uuid::new_v4(), Uuid::new_v4(), 0, 2, None);
    assert_eq!(prediction.outcome, PredictionOutcome::AwayWin);
    assert_eq!(prediction.goal_difference(), -2);
    assert!(prediction.points.is_none());
}

#[test]
fn test_fixture_locks_at_kick_off() {
    let mut scheduled = fixture("Harbour City", "Valley Rovers");
    let kick_off = Utc::now() + Duration::minutes(10);
    scheduled.kick_off_time = kick_off;

    assert!(!scheduled.has_kicked_off(kick_off - Duration::seconds(1)));
    assert!(scheduled.has_kicked_off(kick_off));
    assert!(scheduled.has_kicked_off(kick_off + Duration::hours(2)));
}

#[test]
fn test_scorer_rejected_when_fixture_does_not_ask_for_one() {
    let scheduled = fixture("Harbour City", "Valley Rovers");
    let striker = player("hc-9", "Cleo Striker", GeneralPosition::FW);

    assert!(resolve_scorer(&scheduled, striker).is_err());
}

#[test]
fn test_scorer_accepted_freely_without_known_squads() {
    let mut scheduled = fixture("Harbour City", "Valley Rovers");
    scheduled.should_predict_goal_scorer = true;
    let striker = player("xx-1", "Anyone", GeneralPosition::FW);

    assert_eq!(resolve_scorer(&scheduled, striker.clone()).unwrap(), striker);
}

#[test]
fn test_scorer_must_be_in_a_known_squad() {
    let mut scheduled = fixture("Harbour City", "Valley Rovers");
    scheduled.should_predict_goal_scorer = true;
    scheduled.home_team.players = Some(vec![player("hc-9", "Cleo Striker", GeneralPosition::FW)]);

    // the squad's copy wins over what the client sent
    let sent = player("hc-9", "cleo", GeneralPosition::MF);
    let resolved = resolve_scorer(&scheduled, sent).unwrap();
    assert_eq!(resolved.name, "Cleo Striker");
    assert_eq!(resolved.position.general, GeneralPosition::FW);

    let stranger = player("vr-8", "Dan Playmaker", GeneralPosition::MF);
    assert!(resolve_scorer(&scheduled, stranger).is_err());
}
