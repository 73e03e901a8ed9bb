pub mod health_handler;
pub mod quiz_handler;
pub mod recommendation_handler;

use actix_web::{web, HttpRequest, HttpResponse};

use crate::errors::AppError;

pub use health_handler::{api_status, health_check};
pub use quiz_handler::list_questions;
pub use recommendation_handler::{GENERATE_RECOMMENDATIONS_PATH, SOURCE_HEADER};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(api_status)
        .service(list_questions)
        .configure(recommendation_handler::configure);
}

pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!(
        "No route for {} {}",
        req.method(),
        req.path()
    )))
}
