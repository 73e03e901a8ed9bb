use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use validator::Validate;

use crate::models::domain::{
    recommendations::{REQUIRED_KEYS, SCORE_KEYS},
    Recommendations,
};

static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```[A-Za-z0-9_-]*[ \t]*\r?\n?(.*?)```")
        .expect("FENCED_BLOCK is a valid regex pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("model returned no content")]
    Empty,

    #[error("no JSON object found in model output")]
    NoJsonObject,

    #[error("JSON object in model output is not terminated")]
    Unterminated,

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("missing required keys: {0:?}")]
    MissingKeys(Vec<String>),

    #[error("output does not match the recommendation schema: {0}")]
    SchemaMismatch(String),
}

/// Returns the first balanced `{...}` object in `text`.
///
/// A markdown fence, when present, is searched first; its body is what the
/// model meant to return.
pub fn extract_json_object(text: &str) -> Result<&str, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(body) = FENCED_BLOCK
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
    {
        if let Ok(object) = first_object(body) {
            return Ok(object);
        }
    }

    first_object(text)
}

fn first_object(text: &str) -> Result<&str, ParseError> {
    let start = text.find('{').ok_or(ParseError::NoJsonObject)?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    Err(ParseError::Unterminated)
}

fn missing_keys(value: &serde_json::Value) -> Vec<String> {
    let Some(object) = value.as_object() else {
        return REQUIRED_KEYS.iter().map(|k| k.to_string()).collect();
    };

    let mut missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|key| !object.contains_key(**key))
        .map(|key| key.to_string())
        .collect();

    if let Some(scores) = object.get("scores").and_then(|s| s.as_object()) {
        missing.extend(
            SCORE_KEYS
                .iter()
                .filter(|key| !scores.contains_key(**key))
                .map(|key| format!("scores.{key}")),
        );
    }

    missing
}

/// Extracts, deserializes and validates a model answer. All or nothing.
pub fn parse_recommendations(text: &str) -> Result<Recommendations, ParseError> {
    let raw = extract_json_object(text)?;

    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| ParseError::InvalidJson(e.to_string()))?;

    let missing = missing_keys(&value);
    if !missing.is_empty() {
        return Err(ParseError::MissingKeys(missing));
    }

    let recommendations: Recommendations = serde_json::from_value(value)
        .map_err(|e| ParseError::SchemaMismatch(e.to_string()))?;

    recommendations
        .validate()
        .map_err(|e| ParseError::SchemaMismatch(e.to_string()))?;

    Ok(recommendations)
}
