use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::coercion::is_truthy;

/// One completed quiz attempt as posted by the client.
///
/// Only `answers` has a required shape. Other fields keep the raw JSON so
/// they can be rendered as sent; `None` means the key was absent, while an
/// explicit `null` is kept as `Some(Value::Null)`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub surname: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub correct_answers: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub total_questions: Option<Value>,
    /// Percentage, not re-derived from the counts.
    #[serde(default, deserialize_with = "present")]
    pub score: Option<Value>,
    pub answers: Vec<Answer>,
    // Accepted for compatibility with the client, never rendered.
    #[serde(default, deserialize_with = "present")]
    pub questions: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Value")]
pub struct Answer {
    pub selected: Option<Value>,
    pub correct: Option<Value>,
    /// Trusted as supplied; not checked against `selected == correct`.
    pub is_correct: bool,
}

impl TryFrom<Value> for Answer {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if value.is_null() {
            return Err("answer entry is null".to_string());
        }
        Ok(Self {
            selected: value.get("selected").cloned(),
            correct: value.get("correct").cloned(),
            is_correct: value.get("isCorrect").is_some_and(is_truthy),
        })
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// True when `field` of the raw body is present and truthy.
#[must_use]
pub fn has_required_field(body: &Value, field: &str) -> bool {
    body.get(field).is_some_and(is_truthy)
}
