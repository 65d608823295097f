use chrono::{DateTime, Utc, Duration};

use crate::error::LeagueError;
use crate::league::form::{pad_form, FORM_LENGTH};
use crate::models::fixture::{parse_decimal_odds, FixtureOutcome, Odds};

/// Highest goal count accepted for either side
pub const MAX_REASONABLE_GOALS: i32 = 50;
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 10;

/// Centralized validation service for league operations
pub struct LeagueValidator;

impl LeagueValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate league name
    pub fn validate_league_name(&self, name: &str) -> Result<String, LeagueError> {
        let sanitized = self.validate_and_sanitize_text("League name", name, 255)?;

        // Ensure name has actual content (not just whitespace/special chars)
        if !sanitized.chars().any(|c| c.is_alphanumeric()) {
            return Err(LeagueError::validation("League name must contain alphanumeric characters"));
        }

        Ok(sanitized)
    }

    /// Validate a predicted or final scoreline. Absent values are invalid.
    pub fn validate_goals(&self, home_goals: Option<i32>, away_goals: Option<i32>) -> Result<(u32, u32), LeagueError> {
        let home = home_goals.ok_or_else(|| LeagueError::validation("Home goals are required"))?;
        let away = away_goals.ok_or_else(|| LeagueError::validation("Away goals are required"))?;

        if home < 0 {
            return Err(LeagueError::validation(format!("Home goals cannot be negative: {}", home)));
        }

        if away < 0 {
            return Err(LeagueError::validation(format!("Away goals cannot be negative: {}", away)));
        }

        // Reasonable upper limit (prevent obvious data entry errors)
        if home > MAX_REASONABLE_GOALS {
            return Err(LeagueError::validation(
                format!("Home goals too high: {} (max {})", home, MAX_REASONABLE_GOALS)
            ));
        }

        if away > MAX_REASONABLE_GOALS {
            return Err(LeagueError::validation(
                format!("Away goals too high: {} (max {})", away, MAX_REASONABLE_GOALS)
            ));
        }

        Ok((home as u32, away as u32))
    }

    /// Scorer names must be non-blank and cannot outnumber the goals
    pub fn validate_goal_scorers(&self, scorers: &[String], total_goals: u32) -> Result<Vec<String>, LeagueError> {
        if scorers.len() as u32 > total_goals {
            return Err(LeagueError::validation(format!(
                "{} goal scorers listed for {} goals",
                scorers.len(),
                total_goals
            )));
        }

        scorers
            .iter()
            .map(|s| self.validate_and_sanitize_text("Goal scorer", s, 100))
            .collect()
    }

    /// Two different teams must meet
    pub fn validate_fixture_teams(&self, home_team: &str, away_team: &str) -> Result<(), LeagueError> {
        if home_team.trim().eq_ignore_ascii_case(away_team.trim()) {
            return Err(LeagueError::validation(format!(
                "A team cannot play itself: {}",
                home_team.trim()
            )));
        }
        Ok(())
    }

    /// Validate kick-off time of a newly scheduled fixture
    pub fn validate_kick_off_time(&self, kick_off_time: DateTime<Utc>) -> Result<(), LeagueError> {
        let now = Utc::now();

        // Allow some tolerance for fixtures entered shortly after kick-off
        let tolerance = Duration::hours(2);
        if kick_off_time < now - tolerance {
            return Err(LeagueError::validation(
                format!("Kick-off {} is too far in the past", kick_off_time)
            ));
        }

        let max_future = Duration::days(365);
        if kick_off_time > now + max_future {
            return Err(LeagueError::validation(
                format!("Kick-off {} is too far in the future (max 1 year)", kick_off_time)
            ));
        }

        Ok(())
    }

    /// Every odds string must be a decimal of at least 1.0
    pub fn validate_odds(&self, odds: &Odds) -> Result<Odds, LeagueError> {
        let fields = [
            ("homeWin", &odds.home_win),
            ("draw", &odds.draw),
            ("awayWin", &odds.away_win),
        ];
        for (field, raw) in fields {
            if parse_decimal_odds(raw).is_none() {
                return Err(LeagueError::validation(format!(
                    "Odds '{}' for {} is not a decimal of at least 1.0",
                    raw, field
                )));
            }
        }

        Ok(Odds {
            home_win: odds.home_win.trim().to_string(),
            draw: odds.draw.trim().to_string(),
            away_win: odds.away_win.trim().to_string(),
        })
    }

    /// Form histories hold at most five entries and are stored padded
    pub fn validate_form(&self, form: &[FixtureOutcome]) -> Result<Vec<FixtureOutcome>, LeagueError> {
        pad_form(form).ok_or_else(|| {
            LeagueError::validation(format!(
                "Form holds at most {} entries, got {}",
                FORM_LENGTH,
                form.len()
            ))
        })
    }

    /// Validate week number
    pub fn validate_week_number(&self, week_number: i32) -> Result<(), LeagueError> {
        if week_number < 1 {
            return Err(LeagueError::validation(
                format!("Week number must be positive: {}", week_number)
            ));
        }

        if week_number > 100 {
            return Err(LeagueError::validation(
                format!("Week number too high: {} (max 100)", week_number)
            ));
        }

        Ok(())
    }

    pub fn validate_rating(&self, rating: Option<i32>) -> Result<i32, LeagueError> {
        let rating = rating.ok_or_else(|| LeagueError::validation("Rating is required"))?;
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(LeagueError::validation(format!(
                "Rating must be between {} and {}, got {}",
                MIN_RATING, MAX_RATING, rating
            )));
        }
        Ok(rating)
    }

    /// Validate pagination parameters
    pub fn validate_pagination(&self, limit: Option<i64>, page: Option<i64>) -> Result<(i64, i64), LeagueError> {
        let limit = limit.unwrap_or(50);
        let page = page.unwrap_or(1);

        if limit < 1 {
            return Err(LeagueError::validation("Limit must be positive"));
        }

        if limit > 1000 {
            return Err(LeagueError::validation("Limit too high (max 1000)"));
        }

        if page < 1 {
            return Err(LeagueError::validation("Page must be positive"));
        }

        Ok((limit, (page - 1) * limit))
    }

    /// Comprehensive input sanitization
    pub fn sanitize_string_input(&self, input: &str) -> String {
        input
            .trim()
            .chars()
            .filter(|&c| c != '\0') // Remove null bytes
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Validate and sanitize free text such as stadium or tournament labels
    pub fn validate_and_sanitize_text(&self, field: &str, input: &str, max_len: usize) -> Result<String, LeagueError> {
        let sanitized = self.sanitize_string_input(input);

        if sanitized.is_empty() {
            return Err(LeagueError::validation(format!("{} cannot be empty", field)));
        }

        if sanitized.chars().count() > max_len {
            return Err(LeagueError::validation(
                format!("{} too long (max {} characters)", field, max_len)
            ));
        }

        Ok(sanitized)
    }
}

impl Default for LeagueValidator {
    fn default() -> Self {
        Self::new()
    }
}
