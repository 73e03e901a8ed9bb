use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Health profile scores on a 1-10 scale, drawn as a radar chart by the frontend.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct HealthScores {
    #[validate(range(min = 1, max = 10))]
    pub energi: u8,
    #[serde(rename = "sömn")]
    #[validate(range(min = 1, max = 10))]
    pub somn: u8,
    /// Lower stress gives a higher score.
    #[validate(range(min = 1, max = 10))]
    pub stress: u8,
    #[validate(range(min = 1, max = 10))]
    pub kost: u8,
    #[validate(range(min = 1, max = 10))]
    pub motion: u8,
}

/// The full result shown on the results screen.
///
/// Every field is required and no other key is allowed: a model answer that
/// differs in shape is rejected as a whole and the fallback is served instead.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Recommendations {
    #[validate(nested)]
    pub scores: HealthScores,

    /// Overall analysis of the user's health situation, HTML markup.
    #[validate(length(min = 1), custom(function = "not_blank"))]
    pub summary: String,

    /// Diet advice, HTML markup starting with an `<h3>` heading.
    #[validate(length(min = 1), custom(function = "not_blank"))]
    pub kostrad: String,

    /// Lifestyle plan: sleep, movement and stress routines.
    #[validate(length(min = 1), custom(function = "not_blank"))]
    pub livsstil: String,

    /// Supplements and functional foods with dosages.
    #[serde(rename = "functionalFoods")]
    #[validate(length(min = 1), custom(function = "not_blank"))]
    pub functional_foods: String,

    /// Step-by-step priority plan.
    #[validate(length(min = 1), custom(function = "not_blank"))]
    pub prioriteringar: String,

    /// The recommended course and why it fits.
    #[serde(rename = "dinKurs")]
    #[validate(length(min = 1), custom(function = "not_blank"))]
    pub din_kurs: String,
}

/// JSON keys the results screen reads. Kept in sync with the serde names above.
pub const REQUIRED_KEYS: &[&str] = &[
    "scores",
    "summary",
    "kostrad",
    "livsstil",
    "functionalFoods",
    "prioriteringar",
    "dinKurs",
];

pub const SCORE_KEYS: &[&str] = &["energi", "sömn", "stress", "kost", "motion"];

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl Recommendations {
    pub fn text_sections(&self) -> [(&'static str, &str); 6] {
        [
            ("summary", self.summary.as_str()),
            ("kostrad", self.kostrad.as_str()),
            ("livsstil", self.livsstil.as_str()),
            ("functionalFoods", self.functional_foods.as_str()),
            ("prioriteringar", self.prioriteringar.as_str()),
            ("dinKurs", self.din_kurs.as_str()),
        ]
    }
}
