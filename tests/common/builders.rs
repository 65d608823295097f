use chrono::{Duration, Utc};
use uuid::Uuid;

use matchday_backend::models::fixture::{FinalResult, Fixture, FixtureStats, Odds};
use matchday_backend::models::prediction::Prediction;
use matchday_backend::models::team::{GeneralPosition, Player, PlayerPosition, Team, TeamType};

pub fn sample_catalog_json() -> &'static str {
    r#"{
        "test-league": [
            {
                "name": "Harbour City",
                "logoUrl": "https://crests.test/harbour.png",
                "stadium": "Dockside Park",
                "players": [
                    { "id": "hc-1", "name": "Ada Keeper", "position": { "general": "GK" } },
                    { "id": "hc-4", "name": "Ben Stopper", "position": { "general": "DF" } },
                    { "id": "hc-9", "name": "Cleo Striker", "position": { "general": "FW" } }
                ]
            },
            {
                "name": "Valley Rovers",
                "logoUrl": "https://crests.test/valley.png",
                "stadium": "The Meadow",
                "players": [
                    { "id": "vr-8", "name": "Dan Playmaker", "position": { "general": "MF" } }
                ]
            },
            { "name": "Northgate", "logoUrl": "https://crests.test/northgate.png" }
        ],
        "test-nations": [
            { "name": "Atlantis", "logoUrl": "https://flags.test/atlantis.png" }
        ]
    }"#
}

pub fn team(name: &str) -> Team {
    Team {
        name: name.to_string(),
        logo_url: format!("https://crests.test/{}.png", name.to_lowercase()),
        short_name: None,
        stadium: None,
        players: None,
    }
}

pub fn player(id: &str, name: &str, position: GeneralPosition) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        position: PlayerPosition { general: position },
        country: None,
        picture: None,
        is_injured: None,
        is_suspended: None,
        may_be_injured: None,
    }
}

/// Scheduled fixture kicking off tomorrow, without a result
pub fn fixture(home: &str, away: &str) -> Fixture {
    let now = Utc::now();
    Fixture {
        id: Uuid::new_v4(),
        game_week_id: Uuid::new_v4(),
        home_team: team(home),
        away_team: team(away),
        team_type: TeamType::Clubs,
        kick_off_time: now + Duration::days(1),
        stadium: "Test Ground".to_string(),
        tournament: "Test Cup".to_string(),
        final_result: None,
        should_predict_goal_scorer: false,
        stats: FixtureStats::disabled(),
        odds: None,
        aggregate_score: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn finished_fixture(home: &str, away: &str, home_goals: u32, away_goals: u32) -> Fixture {
    let mut fixture = fixture(home, away);
    fixture.kick_off_time = Utc::now() - Duration::hours(3);
    fixture.final_result = Some(FinalResult {
        home_team_goals: home_goals,
        away_team_goals: away_goals,
        goal_scorers: None,
    });
    fixture
}

pub fn odds(home_win: &str, draw: &str, away_win: &str) -> Odds {
    Odds {
        home_win: home_win.to_string(),
        draw: draw.to_string(),
        away_win: away_win.to_string(),
    }
}

pub fn prediction(fixture: &Fixture, home_goals: u32, away_goals: u32) -> Prediction {
    Prediction::new(Uuid::new_v4(), fixture.id, home_goals, away_goals, None)
}
