use std::sync::Arc;

use crate::{config::Config, services::recommendation_service::RecommendationService};

#[derive(Clone)]
pub struct AppState {
    pub recommendation_service: Arc<RecommendationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let recommendation_service = Arc::new(RecommendationService::from_config(&config));
        Self::with_service(config, recommendation_service)
    }

    pub fn with_service(config: Config, recommendation_service: Arc<RecommendationService>) -> Self {
        Self {
            recommendation_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_state_without_key_has_no_client() {
        let state = AppState::new(Config::test_config());
        assert!(!state.recommendation_service.has_client());
        assert_eq!(
            state.recommendation_service.settings().model,
            state.config.openai_model
        );
    }
}
