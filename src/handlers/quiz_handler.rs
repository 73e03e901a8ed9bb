use actix_web::{get, HttpResponse};

use crate::constants::question_bank::QUESTION_BANK;

/// The question bank in presentation order, so a client can render the quiz
/// and submit tokens the server will accept.
#[get("/api/questions")]
pub async fn list_questions() -> HttpResponse {
    HttpResponse::Ok().json(QUESTION_BANK)
}
