use crate::config::scoring::PointTable;
use crate::models::fixture::{FinalResult, Fixture, Odds};
use crate::models::prediction::{Prediction, PredictionOutcome, PredictionPoints};
use crate::models::team::Player;

/// Turns a prediction and a finished fixture into a points breakdown
#[derive(Debug, Clone)]
pub struct ScoreCalculator {
    table: PointTable,
}

impl ScoreCalculator {
    pub fn new(table: PointTable) -> Self {
        Self { table }
    }

    /// `None` while the fixture has no final result
    pub fn score(&self, prediction: &Prediction, fixture: &Fixture) -> Option<PredictionPoints> {
        score_prediction(prediction, fixture, &self.table)
    }
}

pub fn score_prediction(
    prediction: &Prediction,
    fixture: &Fixture,
    table: &PointTable,
) -> Option<PredictionPoints> {
    let result = fixture.final_result.as_ref()?;
    let scorer = if fixture.should_predict_goal_scorer {
        prediction.goal_scorer.as_ref()
    } else {
        None
    };
    Some(score_scoreline(
        prediction.home_goals,
        prediction.away_goals,
        scorer,
        result,
        fixture.odds.as_ref(),
        table,
    ))
}

/// Every category is awarded independently; `total` is their sum
pub fn score_scoreline(
    home_goals: u32,
    away_goals: u32,
    scorer: Option<&Player>,
    result: &FinalResult,
    odds: Option<&Odds>,
    table: &PointTable,
) -> PredictionPoints {
    let predicted_outcome = PredictionOutcome::from_score(home_goals, away_goals);
    let final_outcome = result.outcome();
    let outcome_correct = predicted_outcome == final_outcome;

    let home_correct = home_goals == result.home_team_goals;
    let away_correct = away_goals == result.away_team_goals;
    let difference_correct =
        home_goals as i64 - away_goals as i64 == result.goal_difference();

    let odds_bonus = if outcome_correct {
        odds.and_then(|o| o.for_outcome(final_outcome))
            .map(|value| table.odds_bonus.points_for(value))
            .unwrap_or(0)
    } else {
        0
    };

    let correct_goal_scorer = scorer
        .filter(|player| result.has_scorer(&player.name))
        .map(|player| table.scorer.for_position(player.position.general))
        .unwrap_or(0);

    PredictionPoints {
        correct_result: award(home_correct && away_correct, table.correct_result),
        correct_outcome: award(outcome_correct, table.correct_outcome),
        correct_goals_by_home_team: award(home_correct, table.correct_goals_by_home_team),
        correct_goals_by_away_team: award(away_correct, table.correct_goals_by_away_team),
        correct_goal_difference: award(difference_correct, table.correct_goal_difference),
        correct_goal_scorer,
        odds_bonus,
        total: 0,
    }
    .with_total()
}

fn award(condition: bool, points: u32) -> u32 {
    if condition {
        points
    } else {
        0
    }
}
