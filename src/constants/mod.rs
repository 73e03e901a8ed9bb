pub mod fallback_recommendations;
pub mod prompts;
pub mod question_bank;
