use std::collections::HashMap;

use serde::Deserialize;
use validator::Validate;

use crate::{
    errors::AppResult,
    models::domain::{AnswerSheet, QuizQuestion},
};

/// Body of `POST /api/generate-recommendations`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecommendationsRequest {
    #[validate(required(message = "Quiz data is required"))]
    pub quiz_data: Option<HashMap<String, String>>,
}

impl GenerateRecommendationsRequest {
    pub fn into_answer_sheet(self, bank: &[QuizQuestion]) -> AppResult<AnswerSheet> {
        self.validate()?;
        let quiz_data = self.quiz_data.unwrap_or_default();
        Ok(AnswerSheet::from_quiz_data(&quiz_data, bank)?)
    }
}
