use actix_web::web;

use crate::handlers::admin::{fixture_handler, league_handler};
use crate::middleware::auth::AuthMiddleware;

pub fn init_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(AuthMiddleware::admins())
            // League management routes
            .service(
                web::resource("/leagues")
                    .route(web::post().to(league_handler::create_league))
            )
            .service(
                web::resource("/leagues/{id}/game-weeks")
                    .route(web::post().to(league_handler::create_game_week))
            )

            // Fixture management routes
            .service(
                web::resource("/game-weeks/{id}/fixtures")
                    .route(web::post().to(fixture_handler::create_fixture))
            )
            .service(
                web::resource("/fixtures/{id}")
                    .route(web::patch().to(fixture_handler::update_fixture))
                    .route(web::delete().to(fixture_handler::delete_fixture))
            )
            .service(
                web::resource("/fixtures/{id}/result")
                    .route(web::put().to(fixture_handler::enter_result))
            )
            .service(
                web::resource("/fixtures/{id}/stats")
                    .route(web::put().to(fixture_handler::update_preview_stats))
            )
            .service(
                web::resource("/fixtures/{id}/stats/suggestion")
                    .route(web::get().to(fixture_handler::suggest_preview_stats))
            )
            .service(
                web::resource("/fixtures/{id}/odds")
                    .route(web::put().to(fixture_handler::update_odds))
            )
    );
}
