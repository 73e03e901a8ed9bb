pub mod request;
pub mod response;

pub use request::GenerateRecommendationsRequest;
pub use response::{ApiStatusResponse, HealthResponse};
