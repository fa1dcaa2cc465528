use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::QueryOptions;

/// Outbound request body: caller options plus the operation's own fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RequestEnvelope(Map<String, Value>);

impl RequestEnvelope {
    /// Start from a copy of the caller's options; the caller's map is left
    /// untouched.
    pub fn from_options(options: Option<&QueryOptions>) -> Self {
        Self(options.map(|o| o.as_map().clone()).unwrap_or_default())
    }

    /// Set a required field, replacing any option of the same name.
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_owned(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Success body returned by the oracle. Only `data` is surfaced.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub data: Value,
}

impl ResponseEnvelope {
    pub fn into_payload(self) -> Value {
        self.data
    }
}
