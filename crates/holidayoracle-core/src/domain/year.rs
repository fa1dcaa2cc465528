use serde_json::Value;

use super::json_type_name;
use crate::ValidationError;

/// Year argument of the holiday-list lookup, textual or numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearInput {
    Text(String),
    Number(i64),
}

impl YearInput {
    /// Text form sent on the wire.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => number.to_string(),
        }
    }
}

impl From<&str> for YearInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for YearInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for YearInput {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<i64> for YearInput {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<u16> for YearInput {
    fn from(value: u16) -> Self {
        Self::Number(i64::from(value))
    }
}

impl TryFrom<&Value> for YearInput {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Self::Text(text.clone())),
            // Integral floats such as 2006.0 are years; anything else keeps
            // its JSON spelling and is left to the four-digit check.
            Value::Number(number) => Ok(number
                .as_i64()
                .or_else(|| number.as_f64().and_then(integral_year))
                .map(Self::Number)
                .unwrap_or_else(|| Self::Text(number.to_string()))),
            other => Err(ValidationError::YearWrongType {
                found: json_type_name(other),
            }),
        }
    }
}

impl TryFrom<Value> for YearInput {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

fn integral_year(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then_some(value as i64)
}
