use serde::Deserialize;

use crate::models::team::GeneralPosition;

/// Points awarded per prediction category. Every value is configuration;
/// the defaults only apply when the `scoring` section leaves a field out.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PointTable {
    pub correct_outcome: u32,
    pub correct_result: u32,
    pub correct_goals_by_home_team: u32,
    pub correct_goals_by_away_team: u32,
    pub correct_goal_difference: u32,
    pub scorer: ScorerPoints,
    pub odds_bonus: OddsBonus,
}

impl Default for PointTable {
    fn default() -> Self {
        Self {
            correct_outcome: 2,
            correct_result: 3,
            correct_goals_by_home_team: 1,
            correct_goals_by_away_team: 1,
            correct_goal_difference: 1,
            scorer: ScorerPoints::default(),
            odds_bonus: OddsBonus::default(),
        }
    }
}

/// Points for a correctly predicted scorer, by general position
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScorerPoints {
    pub goalkeeper: u32,
    pub defender: u32,
    pub midfielder: u32,
    pub forward: u32,
}

impl Default for ScorerPoints {
    fn default() -> Self {
        Self {
            goalkeeper: 8,
            defender: 5,
            midfielder: 3,
            forward: 2,
        }
    }
}

impl ScorerPoints {
    pub fn for_position(&self, position: GeneralPosition) -> u32 {
        match position {
            GeneralPosition::GK => self.goalkeeper,
            GeneralPosition::DF => self.defender,
            GeneralPosition::MF => self.midfielder,
            GeneralPosition::FW => self.forward,
        }
    }
}

/// Bonus for a correct outcome: `round((odds - 1) * multiplier)`, capped
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OddsBonus {
    pub enabled: bool,
    pub multiplier: f64,
    pub max_bonus: u32,
}

impl Default for OddsBonus {
    fn default() -> Self {
        Self {
            enabled: true,
            multiplier: 1.0,
            max_bonus: 10,
        }
    }
}

impl OddsBonus {
    pub fn points_for(&self, decimal_odds: f64) -> u32 {
        if !self.enabled || !decimal_odds.is_finite() || decimal_odds < 1.0 {
            return 0;
        }
        let raw = ((decimal_odds - 1.0) * self.multiplier).round();
        if raw <= 0.0 {
            0
        } else {
            (raw as u32).min(self.max_bonus)
        }
    }
}
