use chrono::Utc;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::db::helpers::{conflict_on_duplicate, require_affected, require_record};
use crate::error::LeagueError;
use crate::league::catalog::TeamCatalog;
use crate::league::fixtures::FixtureService;
use crate::league::form::{derive_team_preview, find_team_fixture};
use crate::league::game_weeks::GameWeekService;
use crate::league::memberships::MembershipService;
use crate::league::player_ratings::PlayerRatingService;
use crate::league::predictions::PredictionService;
use crate::league::scoring::ScoreCalculator;
use crate::league::standings::StandingsService;
use crate::league::validation::LeagueValidator;
use crate::models::fixture::*;
use crate::models::league::*;
use crate::models::player_rating::{PlayerRating, PlayerRatingRequest, PlayerRatingSummary};
use crate::models::prediction::{FixturePredictionsResponse, Prediction, PredictionRequest, PredictionWithUser};
use crate::models::team::{Player, Team};

/// Main league service that orchestrates all league-related operations
pub struct LeagueService {
    pool: PgPool,
    fixtures: FixtureService,
    predictions: PredictionService,
    game_weeks: GameWeekService,
    memberships: MembershipService,
    standings: StandingsService,
    ratings: PlayerRatingService,
    validator: LeagueValidator,
}

impl LeagueService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: pool.clone(),
            fixtures: FixtureService::new(pool.clone()),
            predictions: PredictionService::new(pool.clone()),
            game_weeks: GameWeekService::new(pool.clone()),
            memberships: MembershipService::new(pool.clone()),
            standings: StandingsService::new(pool.clone()),
            ratings: PlayerRatingService::new(pool),
            validator: LeagueValidator::new(),
        }
    }

    // ---- leagues and game weeks ----

    pub async fn create_league(
        &self,
        request: CreateLeagueRequest,
        created_by: Uuid,
    ) -> Result<League, LeagueError> {
        let name = self.validator.validate_league_name(&request.name)?;
        Ok(self.memberships.create_league(&name, created_by).await?)
    }

    pub async fn list_leagues(
        &self,
        user_id: Uuid,
        query: &PaginationQuery,
    ) -> Result<Vec<LeagueWithMembership>, LeagueError> {
        let (limit, offset) = self.validator.validate_pagination(query.limit, query.page)?;
        Ok(self.memberships.list_leagues(user_id, limit, offset).await?)
    }

    /// Returns whether the user newly joined
    pub async fn join_league(&self, league_id: Uuid, user_id: Uuid) -> Result<bool, LeagueError> {
        require_record(self.memberships.get_league(league_id).await, "League")?;
        Ok(self.memberships.join(league_id, user_id).await?)
    }

    pub async fn create_game_week(
        &self,
        league_id: Uuid,
        request: CreateGameWeekRequest,
    ) -> Result<GameWeek, LeagueError> {
        require_record(self.memberships.get_league(league_id).await, "League")?;

        let week_number = match request.week_number {
            Some(number) => number,
            None => self.game_weeks.latest_week_number(league_id).await? + 1,
        };
        self.validator.validate_week_number(week_number)?;

        let name = match request.name {
            Some(name) => self.validator.validate_and_sanitize_text("Game week name", &name, 255)?,
            None => format!("Game week {}", week_number),
        };

        self.game_weeks
            .create(league_id, week_number, &name)
            .await
            .map_err(|e| conflict_on_duplicate(e, &format!("Game week {} already exists", week_number)))
    }

    pub async fn list_game_weeks(&self, league_id: Uuid) -> Result<Vec<GameWeek>, LeagueError> {
        require_record(self.memberships.get_league(league_id).await, "League")?;
        Ok(self.game_weeks.list_for_league(league_id).await?)
    }

    pub async fn list_fixtures(&self, game_week_id: Uuid) -> Result<Vec<Fixture>, LeagueError> {
        require_record(self.game_weeks.get(game_week_id).await, "Game week")?;
        Ok(self.fixtures.list_for_game_week(game_week_id).await?)
    }

    pub async fn get_fixture(&self, fixture_id: Uuid) -> Result<Fixture, LeagueError> {
        require_record(self.fixtures.get(fixture_id).await, "Fixture")
    }

    pub async fn leaderboard(&self, league_id: Uuid) -> Result<LeaderboardResponse, LeagueError> {
        let league = require_record(self.memberships.get_league(league_id).await, "League")?;
        let standings = self.standings.get_leaderboard(league_id).await?;
        Ok(LeaderboardResponse { league, standings })
    }

    // ---- fixture administration ----

    /// Schedule a fixture between two catalog teams
    pub async fn create_fixture(
        &self,
        game_week_id: Uuid,
        request: CreateFixtureRequest,
        catalog: &TeamCatalog,
    ) -> Result<Fixture, LeagueError> {
        require_record(self.game_weeks.get(game_week_id).await, "Game week")?;

        self.validator.validate_fixture_teams(&request.home_team, &request.away_team)?;
        self.validator.validate_kick_off_time(request.kick_off_time)?;
        let tournament = self.validator.validate_and_sanitize_text("Tournament", &request.tournament, 255)?;

        let home_team = lookup_team(catalog, &request.catalog_league, &request.home_team)?;
        let away_team = lookup_team(catalog, &request.catalog_league, &request.away_team)?;

        let stadium = match request.stadium.as_deref().or(home_team.stadium.as_deref()) {
            Some(stadium) => self.validator.validate_and_sanitize_text("Stadium", stadium, 255)?,
            None => return Err(LeagueError::validation("Stadium is required when the home team has none")),
        };

        let now = Utc::now();
        let fixture = Fixture {
            id: Uuid::new_v4(),
            game_week_id,
            home_team,
            away_team,
            team_type: request.team_type,
            kick_off_time: request.kick_off_time,
            stadium,
            tournament,
            final_result: None,
            should_predict_goal_scorer: request.should_predict_goal_scorer,
            stats: FixtureStats::from_parts(request.include_stats, None),
            odds: None,
            aggregate_score: request.aggregate_score,
            created_at: now,
            updated_at: now,
        };

        Ok(self.fixtures.insert(&fixture).await?)
    }

    /// Moving kick-off later reopens predictions; that is how a postponed
    /// fixture is handled.
    pub async fn update_fixture(
        &self,
        fixture_id: Uuid,
        request: UpdateFixtureRequest,
        calculator: &ScoreCalculator,
    ) -> Result<Fixture, LeagueError> {
        let stadium = match request.stadium {
            Some(stadium) => Some(self.validator.validate_and_sanitize_text("Stadium", &stadium, 255)?),
            None => None,
        };
        let tournament = match request.tournament {
            Some(tournament) => Some(self.validator.validate_and_sanitize_text("Tournament", &tournament, 255)?),
            None => None,
        };

        self.edit_fixture(fixture_id, calculator, |fixture| {
            if let Some(kick_off_time) = request.kick_off_time {
                fixture.kick_off_time = kick_off_time;
            }
            if let Some(stadium) = stadium {
                fixture.stadium = stadium;
            }
            if let Some(tournament) = tournament {
                fixture.tournament = tournament;
            }
            if let Some(flag) = request.should_predict_goal_scorer {
                fixture.should_predict_goal_scorer = flag;
            }
            if let Some(include_stats) = request.include_stats {
                let stats = std::mem::replace(&mut fixture.stats, FixtureStats::disabled());
                fixture.stats = stats.with_enabled(include_stats);
            }
            if let Some(aggregate) = request.aggregate_score {
                fixture.aggregate_score = Some(aggregate);
            }
            Ok(())
        })
        .await
    }

    pub async fn delete_fixture(&self, fixture_id: Uuid) -> Result<(), LeagueError> {
        require_affected(self.fixtures.delete(fixture_id).await, "Fixture")?;
        tracing::info!("Deleted fixture {}", fixture_id);
        Ok(())
    }

    /// Record the final result and score every prediction of the fixture in
    /// one transaction. Entering a corrected result re-scores.
    pub async fn enter_result(
        &self,
        fixture_id: Uuid,
        request: FinalResultRequest,
        calculator: &ScoreCalculator,
    ) -> Result<ResultEntryResponse, LeagueError> {
        let (home_goals, away_goals) = self
            .validator
            .validate_goals(request.home_team_goals, request.away_team_goals)?;
        let goal_scorers = match request.goal_scorers {
            Some(scorers) => Some(self.validator.validate_goal_scorers(&scorers, home_goals + away_goals)?),
            None => None,
        };

        let mut tx = self.pool.begin().await?;

        let mut fixture = require_record(
            FixtureService::fetch(&mut *tx, fixture_id, true).await,
            "Fixture",
        )?;

        if !fixture.has_kicked_off(Utc::now()) {
            tracing::warn!("Result entered for fixture {} before its kick-off", fixture_id);
        }

        fixture.final_result = Some(FinalResult {
            home_team_goals: home_goals,
            away_team_goals: away_goals,
            goal_scorers,
        });
        let fixture = FixtureService::write(&mut *tx, &fixture).await?;
        let predictions_scored = score_predictions(&mut tx, &fixture, calculator).await?;

        tx.commit().await?;

        tracing::info!(
            "Fixture {} finished {} - {}, scored {} predictions",
            fixture_id, home_goals, away_goals, predictions_scored
        );

        Ok(ResultEntryResponse {
            fixture,
            predictions_scored,
        })
    }

    /// Replace the preview stats and stamp them with the current time
    pub async fn update_preview_stats(
        &self,
        fixture_id: Uuid,
        request: PreviewStatsRequest,
        calculator: &ScoreCalculator,
    ) -> Result<Fixture, LeagueError> {
        let mut home_team = request.home_team;
        home_team.form = self.validator.validate_form(&home_team.form)?;
        let mut away_team = request.away_team;
        away_team.form = self.validator.validate_form(&away_team.form)?;

        let analysis = request
            .analysis
            .map(|text| self.validator.sanitize_string_input(&text))
            .filter(|text| !text.is_empty());

        self.edit_fixture(fixture_id, calculator, |fixture| {
            if !fixture.stats.is_enabled() {
                return Err(LeagueError::Unavailable("Stats are disabled for this fixture".into()));
            }
            fixture.stats = FixtureStats::Present(Box::new(PreviewStats {
                home_team,
                away_team,
                analysis,
                last_updated: Utc::now(),
            }));
            Ok(())
        })
        .await
    }

    pub async fn update_odds(
        &self,
        fixture_id: Uuid,
        odds: Odds,
        calculator: &ScoreCalculator,
    ) -> Result<Fixture, LeagueError> {
        let odds = self.validator.validate_odds(&odds)?;
        self.edit_fixture(fixture_id, calculator, |fixture| {
            fixture.odds = Some(odds);
            Ok(())
        })
        .await
    }

    /// Apply an admin edit under the fixture's row lock. A finished fixture
    /// has its predictions re-scored in the same transaction, so stored points
    /// always match the saved odds and scorer setting.
    async fn edit_fixture<F>(
        &self,
        fixture_id: Uuid,
        calculator: &ScoreCalculator,
        edit: F,
    ) -> Result<Fixture, LeagueError>
    where
        F: FnOnce(&mut Fixture) -> Result<(), LeagueError>,
    {
        let mut tx = self.pool.begin().await?;

        let mut fixture = require_record(
            FixtureService::fetch(&mut *tx, fixture_id, true).await,
            "Fixture",
        )?;
        edit(&mut fixture)?;
        let fixture = FixtureService::write(&mut *tx, &fixture).await?;

        if fixture.is_finished() {
            let rescored = score_predictions(&mut tx, &fixture, calculator).await?;
            tracing::info!("Re-scored {} predictions of fixture {}", rescored, fixture_id);
        }

        tx.commit().await?;
        Ok(fixture)
    }

    /// Default-fill both teams' form and last fixture from the previous game
    /// week. Nothing is saved.
    pub async fn suggest_preview_stats(&self, fixture_id: Uuid) -> Result<StatsSuggestion, LeagueError> {
        let fixture = self.get_fixture(fixture_id).await?;
        if !fixture.stats.is_enabled() {
            return Err(LeagueError::Unavailable("Stats are disabled for this fixture".into()));
        }

        let placement = require_record(self.fixtures.placement(fixture_id).await, "Fixture")?;
        if self.game_weeks.count_for_league(placement.league_id).await? < 2 {
            return Err(LeagueError::Unavailable("The league needs at least two game weeks".into()));
        }

        let previous_week_number = placement.week_number - 1;
        let previous_week = self
            .game_weeks
            .find_by_number(placement.league_id, previous_week_number)
            .await?
            .ok_or_else(|| {
                LeagueError::Unavailable(format!("There is no game week {}", previous_week_number))
            })?;
        let previous_fixtures = self.fixtures.list_for_game_week(previous_week.id).await?;

        let current = fixture.stats.preview();
        let suggest = |side: Side| {
            let team_name = &fixture.team(side).name;
            find_team_fixture(team_name, &previous_fixtures).and_then(|previous| {
                derive_team_preview(team_name, previous, current.map(|stats| stats.side(side)))
            })
        };
        let home_team = suggest(Side::Home);
        let away_team = suggest(Side::Away);

        if home_team.is_none() && away_team.is_none() {
            return Err(LeagueError::Unavailable(format!(
                "Neither team has a finished fixture in game week {}",
                previous_week_number
            )));
        }

        Ok(StatsSuggestion {
            fixture_id,
            previous_week_number,
            home_team,
            away_team,
        })
    }

    // ---- predictions ----

    /// The fixture row stays locked until the prediction is written, so a
    /// result entered concurrently either sees and scores it or closes it.
    pub async fn submit_prediction(
        &self,
        user_id: Uuid,
        fixture_id: Uuid,
        request: PredictionRequest,
    ) -> Result<Prediction, LeagueError> {
        let (home_goals, away_goals) = self
            .validator
            .validate_goals(request.home_goals, request.away_goals)?;

        let mut tx = self.pool.begin().await?;
        let fixture = require_record(
            FixtureService::fetch(&mut *tx, fixture_id, true).await,
            "Fixture",
        )?;
        self.ensure_member_of_fixture_league(fixture_id, user_id).await?;
        ensure_open_for_predictions(&fixture)?;

        let goal_scorer = match request.goal_scorer {
            Some(player) => Some(resolve_scorer(&fixture, player)?),
            None => None,
        };

        let prediction = Prediction::new(user_id, fixture_id, home_goals, away_goals, goal_scorer);
        let stored = PredictionService::upsert(&mut *tx, &prediction).await?;
        tx.commit().await?;

        tracing::info!(
            "User {} predicted {} - {} for fixture {}",
            user_id, home_goals, away_goals, fixture_id
        );
        Ok(stored)
    }

    pub async fn withdraw_prediction(&self, user_id: Uuid, fixture_id: Uuid) -> Result<(), LeagueError> {
        let mut tx = self.pool.begin().await?;
        let fixture = require_record(
            FixtureService::fetch(&mut *tx, fixture_id, true).await,
            "Fixture",
        )?;
        ensure_open_for_predictions(&fixture)?;

        require_affected(PredictionService::delete(&mut *tx, user_id, fixture_id).await, "Prediction")?;
        tx.commit().await?;
        Ok(())
    }

    /// Everyone's predictions once the fixture is finished, otherwise only
    /// the caller's own.
    pub async fn fixture_predictions(
        &self,
        user_id: Uuid,
        fixture_id: Uuid,
    ) -> Result<FixturePredictionsResponse, LeagueError> {
        let fixture = self.get_fixture(fixture_id).await?;
        let all = self.predictions.list_for_fixture(fixture_id).await?;
        let revealed = fixture.is_finished();

        let predictions: Vec<PredictionWithUser> = if revealed {
            all
        } else {
            all.into_iter()
                .filter(|p| p.prediction.user_id == user_id)
                .collect()
        };

        Ok(FixturePredictionsResponse {
            fixture_id,
            revealed,
            predictions,
        })
    }

    pub async fn my_game_week_predictions(
        &self,
        user_id: Uuid,
        game_week_id: Uuid,
    ) -> Result<Vec<Prediction>, LeagueError> {
        require_record(self.game_weeks.get(game_week_id).await, "Game week")?;
        Ok(self.predictions.list_for_user_in_game_week(user_id, game_week_id).await?)
    }

    // ---- player ratings ----

    /// Players of a finished fixture can be rated by league members
    pub async fn rate_player(
        &self,
        user_id: Uuid,
        fixture_id: Uuid,
        request: PlayerRatingRequest,
    ) -> Result<PlayerRating, LeagueError> {
        let rating = self.validator.validate_rating(request.rating)?;
        let fixture = self.get_fixture(fixture_id).await?;
        if !fixture.is_finished() {
            return Err(LeagueError::Unavailable("Players can be rated once the fixture is finished".into()));
        }
        self.ensure_member_of_fixture_league(fixture_id, user_id).await?;

        let player = fixture
            .home_team
            .find_player(&request.player_id)
            .or_else(|| fixture.away_team.find_player(&request.player_id))
            .ok_or_else(|| LeagueError::not_found(format!("Player {}", request.player_id)))?;

        Ok(self
            .ratings
            .upsert(fixture_id, user_id, &player.id, &player.name, rating)
            .await?)
    }

    pub async fn player_ratings(&self, fixture_id: Uuid) -> Result<Vec<PlayerRatingSummary>, LeagueError> {
        self.get_fixture(fixture_id).await?;
        Ok(self.ratings.summary_for_fixture(fixture_id).await?)
    }

    async fn ensure_member_of_fixture_league(&self, fixture_id: Uuid, user_id: Uuid) -> Result<(), LeagueError> {
        let placement = require_record(self.fixtures.placement(fixture_id).await, "Fixture")?;
        if !self.memberships.is_member(placement.league_id, user_id).await? {
            return Err(LeagueError::Forbidden("Join the league to take part in its fixtures".into()));
        }
        Ok(())
    }
}

fn ensure_open_for_predictions(fixture: &Fixture) -> Result<(), LeagueError> {
    if fixture.is_finished() || fixture.has_kicked_off(Utc::now()) {
        return Err(LeagueError::PredictionLocked);
    }
    Ok(())
}

/// Store fresh points for every prediction of a finished fixture
async fn score_predictions(
    conn: &mut PgConnection,
    fixture: &Fixture,
    calculator: &ScoreCalculator,
) -> Result<usize, sqlx::Error> {
    let predictions = PredictionService::fetch_for_fixture(&mut *conn, fixture.id).await?;
    for prediction in &predictions {
        let points = calculator.score(prediction, fixture);
        PredictionService::store_points(&mut *conn, prediction.user_id, fixture.id, points.as_ref()).await?;
    }
    Ok(predictions.len())
}

fn lookup_team(
    catalog: &TeamCatalog,
    league: &str,
    name: &str,
) -> Result<Team, LeagueError> {
    catalog.find(league, name).cloned().ok_or_else(|| {
        LeagueError::validation(format!("Unknown team '{}' in catalog league '{}'", name.trim(), league))
    })
}

/// A predicted scorer must be in one of the squads when squads are known;
/// the squad's copy of the player is the one stored.
pub fn resolve_scorer(fixture: &Fixture, player: Player) -> Result<Player, LeagueError> {
    if !fixture.should_predict_goal_scorer {
        return Err(LeagueError::validation("This fixture does not take goal scorer predictions"));
    }

    let squads_known = fixture.home_team.players.is_some() || fixture.away_team.players.is_some();
    if !squads_known {
        return Ok(player);
    }

    fixture
        .home_team
        .find_player(&player.id)
        .or_else(|| fixture.away_team.find_player(&player.id))
        .cloned()
        .ok_or_else(|| {
            LeagueError::validation(format!("{} does not play in this fixture", player.name))
        })
}
