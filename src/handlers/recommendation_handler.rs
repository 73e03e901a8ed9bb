use std::sync::Arc;

use actix_web::{error::JsonPayloadError, http::Method, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    constants::question_bank::QUESTION_BANK,
    errors::AppError,
    middleware::get_request_id,
    models::dto::GenerateRecommendationsRequest,
    services::recommendation_service::{RecommendationError, RecommendationOutcome},
};

/// Tells the caller whether the body came from the model or the fallback.
pub const SOURCE_HEADER: &str = "x-recommendation-source";

pub const GENERATE_RECOMMENDATIONS_PATH: &str = "/api/generate-recommendations";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(GENERATE_RECOMMENDATIONS_PATH)
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route(web::post().to(generate_recommendations))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(method_not_allowed)),
    );
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!(
        "[{}] Rejected recommendation request body: {}",
        get_request_id(req).unwrap_or_default(),
        err
    );
    AppError::from(err).into()
}

/// Always answers 200 with a complete recommendation structure once the
/// request body is valid; model failures are absorbed into the fallback.
async fn generate_recommendations(
    req: HttpRequest,
    state: web::Data<Arc<AppState>>,
    body: web::Json<GenerateRecommendationsRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();
    let answers = body.into_inner().into_answer_sheet(QUESTION_BANK)?;

    log::info!(
        "[{}] Generating recommendations for {} answers",
        request_id,
        answers.len()
    );

    let outcome = state
        .recommendation_service
        .spawn(answers)
        .join()
        .await
        .unwrap_or_else(|| {
            RecommendationOutcome::fallback(RecommendationError::Aborted(
                "generation task ended without a result".to_string(),
            ))
        });

    log::info!(
        "[{}] Responding with {} recommendations",
        request_id,
        outcome.source.label()
    );

    Ok(HttpResponse::Ok()
        .insert_header((SOURCE_HEADER, outcome.source.label()))
        .json(outcome.recommendations))
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed(format!(
        "{} is not supported on {}",
        req.method(),
        req.path()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        constants::fallback_recommendations::FALLBACK_RECOMMENDATIONS,
        handlers::{configure_routes, not_found},
        middleware::{cors_policy, RequestIdMiddleware},
        models::domain::Recommendations,
        services::{
            completion_client::{CompletionClient, CompletionError, MockCompletionClient},
            recommendation_service::{GenerationSettings, RecommendationService},
        },
        test_utils::{
            fixtures::{model_recommendations, model_recommendations_json, scenario_quiz_data},
            test_helpers::{assert_client_error_status, assert_success_status},
        },
    };
    use actix_web::{http::header, http::StatusCode, test, App};
    use serde_json::json;

    fn state_with(client: Option<Arc<dyn CompletionClient>>) -> Arc<AppState> {
        let config = Config::test_config();
        let mut settings = GenerationSettings::from_config(&config);
        settings.retry_backoff = std::time::Duration::ZERO;
        let service = Arc::new(RecommendationService::new(client, settings));
        Arc::new(AppState::with_service(config, service))
    }

    macro_rules! init_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .wrap(cors_policy())
                    .wrap(RequestIdMiddleware)
                    .configure(configure_routes)
                    .default_service(web::to(not_found)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_without_key_returns_fallback() {
        let app = init_app!(state_with(None));

        let req = test::TestRequest::post()
            .uri(GENERATE_RECOMMENDATIONS_PATH)
            .set_json(json!({ "quizData": scenario_quiz_data() }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(SOURCE_HEADER).unwrap(), "fallback");
        let body: Recommendations = test::read_body_json(resp).await;
        assert_eq!(body, *FALLBACK_RECOMMENDATIONS);
    }

    #[actix_web::test]
    async fn test_model_output_is_passed_through() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete()
            .times(1)
            .returning(|_| Ok(model_recommendations_json().to_string()));
        let app = init_app!(state_with(Some(Arc::new(mock))));

        let req = test::TestRequest::post()
            .uri(GENERATE_RECOMMENDATIONS_PATH)
            .set_json(json!({ "quizData": scenario_quiz_data() }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_success_status(resp.status());
        assert_eq!(resp.headers().get(SOURCE_HEADER).unwrap(), "model");
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::to_value(model_recommendations()).unwrap());
        assert_eq!(body["scores"]["sömn"], 2);
    }

    #[actix_web::test]
    async fn test_unparseable_model_output_returns_fallback() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete()
            .times(1)
            .returning(|_| Ok("Här är dina råd, tyvärr utan JSON.".to_string()));
        let app = init_app!(state_with(Some(Arc::new(mock))));

        let req = test::TestRequest::post()
            .uri(GENERATE_RECOMMENDATIONS_PATH)
            .set_json(json!({ "quizData": scenario_quiz_data() }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Recommendations = test::read_body_json(resp).await;
        assert_eq!(body, *FALLBACK_RECOMMENDATIONS);
    }

    #[actix_web::test]
    async fn test_rejected_request_is_not_retried() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete()
            .times(1)
            .returning(|_| Err(CompletionError::Rejected("invalid api key".into())));
        let app = init_app!(state_with(Some(Arc::new(mock))));

        let req = test::TestRequest::post()
            .uri(GENERATE_RECOMMENDATIONS_PATH)
            .set_json(json!({ "quizData": scenario_quiz_data() }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(SOURCE_HEADER).unwrap(), "fallback");
    }

    #[actix_web::test]
    async fn test_missing_quiz_data_is_bad_request() {
        let app = init_app!(state_with(None));

        let req = test::TestRequest::post()
            .uri(GENERATE_RECOMMENDATIONS_PATH)
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("Quiz data is required"));
        assert_eq!(body["code"], 400);
    }

    #[actix_web::test]
    async fn test_empty_quiz_data_is_accepted() {
        let app = init_app!(state_with(None));

        let req = test::TestRequest::post()
            .uri(GENERATE_RECOMMENDATIONS_PATH)
            .set_json(json!({ "quizData": {} }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_success_status(resp.status());
    }

    #[actix_web::test]
    async fn test_unknown_answer_token_is_bad_request() {
        let app = init_app!(state_with(None));

        let req = test::TestRequest::post()
            .uri(GENERATE_RECOMMENDATIONS_PATH)
            .set_json(json!({ "quizData": { "1": "caffeinated" } }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_two_keys_for_one_question_is_bad_request() {
        let app = init_app!(state_with(None));

        let req = test::TestRequest::post()
            .uri(GENERATE_RECOMMENDATIONS_PATH)
            .set_json(json!({ "quizData": { "1": "low_energy", "01": "high_energy" } }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("more than once"));
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = init_app!(state_with(None));

        let req = test::TestRequest::post()
            .uri(GENERATE_RECOMMENDATIONS_PATH)
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"quizData\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_client_error_status(resp.status());
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 400);
    }

    #[actix_web::test]
    async fn test_cors_preflight_returns_empty_ok() {
        let app = init_app!(state_with(None));

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri(GENERATE_RECOMMENDATIONS_PATH)
            .insert_header((header::ORIGIN, "https://quiz.example.org"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn test_bare_options_returns_empty_ok() {
        let app = init_app!(state_with(None));

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri(GENERATE_RECOMMENDATIONS_PATH)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn test_get_is_method_not_allowed() {
        let app = init_app!(state_with(None));

        let req = test::TestRequest::get()
            .uri(GENERATE_RECOMMENDATIONS_PATH)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 405);
    }

    #[actix_web::test]
    async fn test_response_carries_request_id() {
        let app = init_app!(state_with(None));

        let req = test::TestRequest::post()
            .uri(GENERATE_RECOMMENDATIONS_PATH)
            .insert_header(("x-request-id", "quiz-42"))
            .set_json(json!({ "quizData": scenario_quiz_data() }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.headers().get("x-request-id").unwrap(), "quiz-42");
    }
}
