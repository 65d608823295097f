use actix_web::web;

pub mod account;
pub mod admin;
pub mod backend_health;
pub mod league;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health)
        .service(account::register)
        .service(account::login);

    // League routes (require authentication)
    cfg.service(
        web::scope("/league")
            .wrap(AuthMiddleware::members())
            .service(league::list_catalog_leagues)
            .service(league::get_catalog_teams)
            .service(league::get_catalog_team)
            .service(league::list_leagues)
            .service(league::join_league)
            .service(league::list_game_weeks)
            .service(league::get_leaderboard)
            .service(league::list_game_week_fixtures)
            .service(league::get_my_game_week_predictions)
            .service(league::get_fixture)
            .service(league::submit_prediction)
            .service(league::withdraw_prediction)
            .service(league::get_fixture_predictions)
            .service(league::rate_player)
            .service(league::get_player_ratings)
    );

    // Fixture administration (requires admin role)
    admin::init_admin_routes(cfg);
}
