use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use functional_quiz_server::{
    app_state::AppState,
    config::Config,
    handlers::{configure_routes, not_found},
    middleware::{cors_policy, RequestIdMiddleware},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if let Err(err) = config.validate() {
        log::error!("[{}] Invalid configuration: {}", err.error_code(), err);
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()));
    }

    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    log::info!(
        "Starting recommendation server on {}:{} (model {})",
        bind_address.0,
        bind_address.1,
        config.openai_model
    );
    if !config.has_api_key() {
        log::warn!("OPENAI_API_KEY is not set, /api/generate-recommendations will serve fallback content");
    }

    let state = Arc::new(AppState::new(config));

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors_policy())
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(configure_routes)
            .default_service(web::to(not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}
