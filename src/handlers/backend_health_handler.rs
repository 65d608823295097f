use actix_web::HttpResponse;

use crate::models::common::ApiResponse;

pub async fn backend_health_check() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::<()>::success_message("Backend is up"))
}
