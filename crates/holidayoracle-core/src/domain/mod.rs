//! # Domain Inputs
//!
//! Typed forms of everything a caller can pass to an operation.
//!
//! ## Overview
//!
//! Each accepted argument shape is a variant or a newtype, fixed at the API
//! boundary through `From`/`TryFrom`. Dynamically typed callers convert from
//! `serde_json::Value`, which is where wrong-type arguments are rejected.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Credentials`] | Non-empty bearer API key |
//! | [`CountryCode`] | Non-empty country/region code |
//! | [`DateInput`] | Date text, Unix timestamp or native date |
//! | [`YearInput`] | Year as text or number |
//! | [`QueryOptions`] | Extra request parameters |

mod country;
mod credentials;
mod date;
mod options;
mod year;

use serde_json::Value;

pub use country::CountryCode;
pub use credentials::Credentials;
pub use date::{normalize_date, DateInput};
pub use options::QueryOptions;
pub use year::YearInput;

pub(crate) const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
