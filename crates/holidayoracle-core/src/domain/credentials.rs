use std::fmt::{Debug, Formatter};

use serde_json::Value;

use super::json_type_name;
use crate::ValidationError;

/// Bearer API key sent with every request.
///
/// Always non-empty. `Debug` never prints the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials(String);

impl Credentials {
    /// Validate an optional raw key. Absent and empty keys are both reported
    /// as missing.
    pub fn parse(input: Option<&str>) -> Result<Self, ValidationError> {
        match input {
            None => Err(ValidationError::CredentialsMissing),
            Some(key) if key.is_empty() => Err(ValidationError::CredentialsMissing),
            Some(key) => Ok(Self(key.to_owned())),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credentials(<redacted>)")
    }
}

impl TryFrom<&str> for Credentials {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(Some(value))
    }
}

impl TryFrom<String> for Credentials {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(Some(value.as_str()))
    }
}

impl TryFrom<Option<&str>> for Credentials {
    type Error = ValidationError;

    fn try_from(value: Option<&str>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<Option<String>> for Credentials {
    type Error = ValidationError;

    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        Self::parse(value.as_deref())
    }
}

/// Falsy JSON values (`null`, `false`, `0`, `""`) count as a missing key;
/// any other non-string value is the wrong type.
impl TryFrom<&Value> for Credentials {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null | Value::Bool(false) => Err(ValidationError::CredentialsMissing),
            Value::Number(n) if n.as_f64() == Some(0.0) => Err(ValidationError::CredentialsMissing),
            Value::String(key) => Self::parse(Some(key.as_str())),
            other => Err(ValidationError::CredentialsWrongType {
                found: json_type_name(other),
            }),
        }
    }
}

impl TryFrom<Value> for Credentials {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}
