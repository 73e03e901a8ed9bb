pub mod answer_sheet;
pub mod quiz_question;
pub mod recommendations;

pub use answer_sheet::{AnswerSheet, QuizError};
pub use quiz_question::{QuestionId, QuizOption, QuizQuestion};
pub use recommendations::{HealthScores, Recommendations};
