use std::collections::BTreeMap;

use crate::{
    constants::question_bank::QUESTION_BANK,
    models::domain::{
        answer_sheet::validate_answer, AnswerSheet, QuestionId, QuizError, QuizQuestion,
    },
};

/// Walks the fixed question list and records one answer per question.
#[derive(Debug, Clone)]
pub struct QuizCollector {
    bank: &'static [QuizQuestion],
    cursor: usize,
    answers: BTreeMap<QuestionId, String>,
}

impl Default for QuizCollector {
    fn default() -> Self {
        Self::new(QUESTION_BANK)
    }
}

impl QuizCollector {
    pub fn new(bank: &'static [QuizQuestion]) -> Self {
        Self {
            bank,
            cursor: 0,
            answers: BTreeMap::new(),
        }
    }

    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        self.bank.get(self.cursor)
    }

    /// 1-based position of the current question and the total count.
    pub fn position(&self) -> (usize, usize) {
        (self.cursor + 1, self.bank.len())
    }

    pub fn selected(&self, question_id: QuestionId) -> Option<&str> {
        self.answers.get(&question_id).map(String::as_str)
    }

    /// Records `value` for `question_id`; answering the current question moves
    /// the cursor forward. Tokens outside the question's option set are rejected.
    pub fn record_answer(&mut self, question_id: QuestionId, value: &str) -> Result<(), QuizError> {
        validate_answer(self.bank, question_id, value)?;
        self.answers.insert(question_id, value.to_string());

        let answered_current = self
            .current_question()
            .is_some_and(|q| q.id == question_id);
        if answered_current && self.cursor + 1 < self.bank.len() {
            self.cursor += 1;
        }

        Ok(())
    }

    /// Steps back one question. Returns false on the first question.
    pub fn go_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn missing(&self) -> Vec<QuestionId> {
        self.bank
            .iter()
            .map(|q| q.id)
            .filter(|id| !self.answers.contains_key(id))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    pub fn answers(&self) -> Result<AnswerSheet, QuizError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(QuizError::Incomplete { missing });
        }
        Ok(AnswerSheet::from_validated(self.answers.clone()))
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.answers.clear();
    }
}
