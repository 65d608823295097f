use matchday_backend::models::common::MatchResult;
use matchday_backend::models::fixture::FixtureOutcome;
use matchday_backend::models::prediction::PredictionOutcome;

#[test]
fn test_from_goals_is_total_and_draw_only_on_equal_goals() {
    for home in 0..12u32 {
        for away in 0..12u32 {
            let result = MatchResult::from_goals(home, away);
            assert_eq!(result == MatchResult::Draw, home == away, "{}-{}", home, away);
            assert_eq!(result == MatchResult::Win, home > away, "{}-{}", home, away);
            assert_eq!(MatchResult::from_goals(away, home), result.inverse());
        }
    }
}

#[test]
fn test_prediction_outcome_from_score() {
    assert_eq!(PredictionOutcome::from_score(2, 1), PredictionOutcome::HomeWin);
    assert_eq!(PredictionOutcome::from_score(0, 0), PredictionOutcome::Draw);
    assert_eq!(PredictionOutcome::from_score(1, 4), PredictionOutcome::AwayWin);
    assert_eq!(PredictionOutcome::from_score(4, 1).mirrored(), PredictionOutcome::from_score(1, 4));
}

#[test]
fn test_outcomes_serialize_as_wire_symbols() {
    assert_eq!(serde_json::to_string(&PredictionOutcome::HomeWin).unwrap(), r#""HOME_WIN""#);
    assert_eq!(serde_json::to_string(&MatchResult::Loss).unwrap(), r#""LOSS""#);

    let form = vec![
        FixtureOutcome::from(MatchResult::Win),
        FixtureOutcome::from(MatchResult::Draw),
        FixtureOutcome::from(MatchResult::Loss),
        FixtureOutcome::None,
    ];
    assert_eq!(serde_json::to_string(&form).unwrap(), r#"["W","D","L","-"]"#);
}
