pub mod completion_client;
pub mod prompt_builder;
pub mod quiz_collector;
pub mod quiz_session;
pub mod recommendation_service;
pub mod response_parser;
