use actix_web::{web, HttpResponse};

use crate::handlers::failure;
use crate::league::catalog::CatalogHandle;
use crate::models::common::ApiResponse;

#[tracing::instrument(name = "List catalog leagues", skip(catalog))]
pub async fn list_catalog_leagues(catalog: web::Data<CatalogHandle>) -> HttpResponse {
    match catalog.get() {
        Ok(catalog) => {
            let keys: Vec<String> = catalog.league_keys().into_iter().map(String::from).collect();
            HttpResponse::Ok().json(ApiResponse::success("Catalog leagues", keys))
        }
        Err(e) => failure("load team catalog", e),
    }
}

#[tracing::instrument(name = "Get catalog teams", skip(catalog))]
pub async fn get_catalog_teams(league: String, catalog: web::Data<CatalogHandle>) -> HttpResponse {
    let catalog = match catalog.get() {
        Ok(catalog) => catalog,
        Err(e) => return failure("load team catalog", e),
    };

    match catalog.teams(&league) {
        Some(teams) => HttpResponse::Ok().json(ApiResponse::success("Teams retrieved", teams)),
        None => HttpResponse::NotFound()
            .json(ApiResponse::<()>::error(format!("Catalog league '{}' not found", league))),
    }
}

#[tracing::instrument(name = "Get catalog team", skip(catalog))]
pub async fn get_catalog_team(
    league: String,
    team_name: String,
    catalog: web::Data<CatalogHandle>,
) -> HttpResponse {
    let catalog = match catalog.get() {
        Ok(catalog) => catalog,
        Err(e) => return failure("load team catalog", e),
    };

    match catalog.find(&league, &team_name) {
        Some(team) => HttpResponse::Ok().json(ApiResponse::success("Team retrieved", team)),
        None => HttpResponse::NotFound()
            .json(ApiResponse::<()>::error(format!("Team '{}' not found in '{}'", team_name, league))),
    }
}
