#[cfg(test)]
pub mod fixtures {
    use std::collections::HashMap;

    use serde_json::json;

    use crate::{
        constants::question_bank::QUESTION_BANK,
        models::domain::{AnswerSheet, HealthScores, Recommendations},
        services::quiz_collector::QuizCollector,
    };

    /// The five-answer mapping used across generator and endpoint tests.
    pub fn scenario_quiz_data() -> HashMap<String, String> {
        [
            ("1", "low_energy"),
            ("2", "poor_sleep"),
            ("3", "chronic_stress"),
            ("4", "sedentary"),
            ("5", "poor_diet"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    pub fn scenario_answers() -> AnswerSheet {
        AnswerSheet::from_quiz_data(&scenario_quiz_data(), QUESTION_BANK)
            .expect("scenario answers are valid")
    }

    /// Complete mappings that together use every option of every question:
    /// one per option index across all questions, then one per
    /// question/option pair on top of the first-option baseline.
    pub fn complete_answer_sheets() -> Vec<AnswerSheet> {
        let widest = QUESTION_BANK
            .iter()
            .map(|q| q.options.len())
            .max()
            .unwrap_or(0);

        let mut sheets: Vec<AnswerSheet> = (0..widest)
            .map(|k| {
                let data: HashMap<String, String> = QUESTION_BANK
                    .iter()
                    .map(|q| {
                        let option = &q.options[k % q.options.len()];
                        (q.id.to_string(), option.value.to_string())
                    })
                    .collect();
                AnswerSheet::from_quiz_data(&data, QUESTION_BANK).expect("bank tokens are valid")
            })
            .collect();

        for question in QUESTION_BANK {
            for option in question.options {
                let mut data: HashMap<String, String> = QUESTION_BANK
                    .iter()
                    .map(|q| (q.id.to_string(), q.options[0].value.to_string()))
                    .collect();
                data.insert(question.id.to_string(), option.value.to_string());
                sheets.push(
                    AnswerSheet::from_quiz_data(&data, QUESTION_BANK)
                        .expect("bank tokens are valid"),
                );
            }
        }

        sheets
    }

    /// Answers every question with its first option.
    pub fn answer_all(collector: &mut QuizCollector) {
        for question in QUESTION_BANK {
            collector
                .record_answer(question.id, question.options[0].value)
                .expect("first option is valid");
        }
    }

    pub fn model_recommendations() -> Recommendations {
        Recommendations {
            scores: HealthScores {
                energi: 3,
                somn: 2,
                stress: 2,
                kost: 4,
                motion: 3,
            },
            summary: "<h3>Din Hälsosammanfattning</h3><p>Baserat på dina svar ser jag att du är trött.</p>".to_string(),
            kostrad: "<h3>Kostråd</h3><p>Ät mer protein till frukost.</p>".to_string(),
            livsstil: "<h3>Livsstil</h3><p>Lägg dig 22:30.</p>".to_string(),
            functional_foods: "<h3>Functional Foods</h3><p>Magnesium på kvällen.</p>".to_string(),
            prioriteringar: "<h3>Prioriteringar</h3><p>Börja med sömnen.</p>".to_string(),
            din_kurs: "<h3>Din Kurs</h3><p>Functional Flow passar dig.</p>".to_string(),
        }
    }

    /// The same content as [`model_recommendations`], as the model would send it.
    pub fn model_recommendations_json() -> serde_json::Value {
        json!({
            "scores": { "energi": 3, "sömn": 2, "stress": 2, "kost": 4, "motion": 3 },
            "summary": "<h3>Din Hälsosammanfattning</h3><p>Baserat på dina svar ser jag att du är trött.</p>",
            "kostrad": "<h3>Kostråd</h3><p>Ät mer protein till frukost.</p>",
            "livsstil": "<h3>Livsstil</h3><p>Lägg dig 22:30.</p>",
            "functionalFoods": "<h3>Functional Foods</h3><p>Magnesium på kvällen.</p>",
            "prioriteringar": "<h3>Prioriteringar</h3><p>Börja med sömnen.</p>",
            "dinKurs": "<h3>Din Kurs</h3><p>Functional Flow passar dig.</p>"
        })
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents a client error (4xx)
    pub fn assert_client_error_status(status: StatusCode) {
        assert!(
            status.is_client_error(),
            "Expected client error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_json_matches_struct() {
        let parsed: crate::models::domain::Recommendations =
            serde_json::from_value(model_recommendations_json()).unwrap();
        assert_eq!(parsed, model_recommendations());
    }

    #[test]
    fn test_scenario_answers_cover_first_five_questions() {
        let answers = scenario_answers();
        assert_eq!(answers.len(), 5);
        assert_eq!(answers.get(4), Some("sedentary"));
    }
}
