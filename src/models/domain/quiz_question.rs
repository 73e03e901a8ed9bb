use serde::Serialize;

pub type QuestionId = u8;

/// One fixed question of the health quiz and its enumerated answer tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub topic: &'static str,
    pub question: &'static str,
    pub subtitle: &'static str,
    pub options: &'static [QuizOption],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub value: &'static str, // token sent in quizData
    pub label: &'static str,
    pub description: &'static str,
}

impl QuizQuestion {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn option_values(&self) -> Vec<&'static str> {
        self.options.iter().map(|o| o.value).collect()
    }
}

pub fn find_question(bank: &[QuizQuestion], id: QuestionId) -> Option<&QuizQuestion> {
    bank.iter().find(|q| q.id == id)
}
