use std::fmt::Write as _;

use once_cell::sync::Lazy;

use crate::{
    constants::prompts::{
        COURSES, FORMATTING_RULES, MIN_WORDS_PER_SECTION, MIN_WORDS_SUMMARY, PERSONA_INTRO,
        SCHEMA_EXAMPLE, SCORING_RULES,
    },
    models::domain::{quiz_question::find_question, AnswerSheet, QuizQuestion, Recommendations},
};

/// JSON Schema of the expected answer, rendered once.
pub static RECOMMENDATIONS_SCHEMA: Lazy<String> = Lazy::new(|| {
    serde_json::to_string_pretty(&schemars::schema_for!(Recommendations)).unwrap_or_default()
});

/// Renders the user prompt for a set of answers. Pure: same answers, same text.
pub fn build_user_prompt(answers: &AnswerSheet, bank: &[QuizQuestion]) -> String {
    let mut prompt = String::new();

    let _ = writeln!(prompt, "{}\n", PERSONA_INTRO);
    let _ = writeln!(prompt, "{}\n", FORMATTING_RULES);

    let _ = writeln!(prompt, "QUIZRESULTAT:");
    for (question_id, value) in answers.iter() {
        match find_question(bank, question_id) {
            Some(question) => {
                let _ = writeln!(prompt, "{}: {} ({})", question_id, value, question.topic);
            }
            None => {
                let _ = writeln!(prompt, "{}: {}", question_id, value);
            }
        }
    }
    prompt.push('\n');

    let _ = writeln!(prompt, "{}\n", SCORING_RULES);

    let _ = writeln!(prompt, "KURSER SOM FINNS (välj den mest passande):");
    for (index, course) in COURSES.iter().enumerate() {
        let _ = writeln!(
            prompt,
            "{}. {} ({} veckor, {}, {} recept): {} Passar för: {}.",
            index + 1,
            course.name,
            course.weeks,
            course.price,
            course.recipes,
            course.focus,
            course.suited_for
        );
    }
    prompt.push('\n');

    let _ = writeln!(prompt, "Svara med JSON i EXAKT detta format:\n{}\n", SCHEMA_EXAMPLE);
    let _ = writeln!(prompt, "Svaret måste följa detta JSON Schema:\n{}\n", *RECOMMENDATIONS_SCHEMA);

    let _ = writeln!(prompt, "LÄNGDKRAV:");
    let _ = writeln!(prompt, "- \"summary\" ska vara minst {} ord", MIN_WORDS_SUMMARY);
    let _ = writeln!(
        prompt,
        "- Varje övrig textsektion (kostrad, livsstil, functionalFoods, prioriteringar, dinKurs) ska vara minst {} ord",
        MIN_WORDS_PER_SECTION
    );
    let _ = write!(prompt, "- Alla nycklar måste finnas med. Skriv på svenska.");

    prompt
}
