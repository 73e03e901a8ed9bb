use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use thiserror::Error;

use crate::models::domain::quiz_question::{find_question, QuestionId, QuizQuestion};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("unknown question id '{0}'")]
    UnknownQuestion(QuestionId),

    #[error("question key '{0}' is not a question id")]
    MalformedQuestionKey(String),

    #[error("question {0} is answered more than once")]
    DuplicateQuestion(QuestionId),

    #[error("'{value}' is not an option of question {question_id} (expected one of: {allowed})")]
    InvalidOption {
        question_id: QuestionId,
        value: String,
        allowed: String,
    },

    #[error("quiz is incomplete, unanswered questions: {missing:?}")]
    Incomplete { missing: Vec<QuestionId> },

    #[error("no recommendation request is pending")]
    NothingPending,
}

/// Answers keyed by question id. Ordered so prompt rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnswerSheet(BTreeMap<QuestionId, String>);

impl AnswerSheet {
    /// Builds a sheet from entries that have already been checked against the bank.
    pub(crate) fn from_validated(answers: BTreeMap<QuestionId, String>) -> Self {
        Self(answers)
    }

    /// Validates a raw `quizData` object against the question bank.
    ///
    /// Partial mappings are accepted; every present entry must name a known
    /// question and one of its option tokens. Two keys naming the same
    /// question (`"1"` and `"01"`) are rejected.
    pub fn from_quiz_data(
        quiz_data: &HashMap<String, String>,
        bank: &[QuizQuestion],
    ) -> Result<Self, QuizError> {
        let mut answers = BTreeMap::new();

        for (key, value) in quiz_data {
            let question_id: QuestionId = key
                .trim()
                .parse()
                .map_err(|_| QuizError::MalformedQuestionKey(key.clone()))?;
            validate_answer(bank, question_id, value)?;
            if answers.insert(question_id, value.clone()).is_some() {
                return Err(QuizError::DuplicateQuestion(question_id));
            }
        }

        Ok(Self(answers))
    }

    pub fn get(&self, question_id: QuestionId) -> Option<&str> {
        self.0.get(&question_id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &str)> {
        self.0.iter().map(|(id, value)| (*id, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Checks that `value` is one of the enumerated tokens of `question_id`.
pub fn validate_answer(
    bank: &[QuizQuestion],
    question_id: QuestionId,
    value: &str,
) -> Result<(), QuizError> {
    let question =
        find_question(bank, question_id).ok_or(QuizError::UnknownQuestion(question_id))?;

    if !question.has_option(value) {
        return Err(QuizError::InvalidOption {
            question_id,
            value: value.to_string(),
            allowed: question.option_values().join(", "),
        });
    }

    Ok(())
}
