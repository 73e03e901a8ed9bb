use std::sync::Arc;

use actix_web::{get, web, HttpResponse};
use chrono::Utc;

use crate::{
    app_state::AppState,
    models::dto::{ApiStatusResponse, HealthResponse},
};

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now(),
    })
}

/// Reports whether model credentials are present, without revealing them.
#[get("/api/test")]
pub async fn api_status(state: web::Data<Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(ApiStatusResponse {
        status: "OK".to_string(),
        message: "API endpoint working".to_string(),
        timestamp: Utc::now(),
        has_api_key: state.recommendation_service.has_client(),
        model: state.config.openai_model.clone(),
    })
}
