use serde_json::Value;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use super::json_type_name;
use crate::ValidationError;

/// A calendar date as a caller may hand it over.
///
/// The variant is fixed when the value is built, so the validators never
/// have to guess what kind of value they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// `YYYY-MM-DD` text or an all-digit Unix timestamp as text.
    Text(String),
    /// Numeric Unix timestamp, sent to the service as a JSON number.
    Timestamp(u64),
    /// Native date, rendered as canonical `YYYY-MM-DD` before sending.
    Date(Date),
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for DateInput {
    fn from(value: u64) -> Self {
        Self::Timestamp(value)
    }
}

impl From<u32> for DateInput {
    fn from(value: u32) -> Self {
        Self::Timestamp(u64::from(value))
    }
}

impl From<Date> for DateInput {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

/// Uses the calendar date in the value's own offset.
impl From<OffsetDateTime> for DateInput {
    fn from(value: OffsetDateTime) -> Self {
        Self::Date(value.date())
    }
}

impl From<PrimitiveDateTime> for DateInput {
    fn from(value: PrimitiveDateTime) -> Self {
        Self::Date(value.date())
    }
}

impl TryFrom<i64> for DateInput {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self::Timestamp)
            .map_err(|_| ValidationError::TimestampNotInteger {
                value: value.to_string(),
            })
    }
}

impl TryFrom<i32> for DateInput {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<&Value> for DateInput {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Self::Text(text.clone())),
            Value::Number(number) => number.as_u64().map(Self::Timestamp).ok_or_else(|| {
                ValidationError::TimestampNotInteger {
                    value: number.to_string(),
                }
            }),
            other => Err(ValidationError::DateWrongType {
                found: json_type_name(other),
            }),
        }
    }
}

impl TryFrom<Value> for DateInput {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

/// Render a native date as `YYYY-MM-DD` with zero-padded month and day.
pub fn normalize_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::{Month, Time, UtcOffset};

    use super::*;

    #[test]
    fn normalizes_with_zero_padding() {
        let date = Date::from_calendar_date(2023, Month::March, 5).expect("valid date");
        assert_eq!(normalize_date(date), "2023-03-05");

        let date = Date::from_calendar_date(1999, Month::December, 31).expect("valid date");
        assert_eq!(normalize_date(date), "1999-12-31");
    }

    #[test]
    fn offset_datetime_keeps_its_local_calendar_day() {
        let date = Date::from_calendar_date(2024, Month::January, 1).expect("valid date");
        let late_evening = date
            .with_time(Time::from_hms(23, 30, 0).expect("valid time"))
            .assume_offset(UtcOffset::from_hms(-5, 0, 0).expect("valid offset"));

        assert_eq!(DateInput::from(late_evening), DateInput::Date(date));
    }

    #[test]
    fn json_conversion_checks_type() {
        assert_eq!(
            DateInput::try_from(json!("2024-01-01")).expect("text is accepted"),
            DateInput::Text(String::from("2024-01-01"))
        );
        assert_eq!(
            DateInput::try_from(json!(1_700_000_000_u64)).expect("integer is accepted"),
            DateInput::Timestamp(1_700_000_000)
        );

        let err = DateInput::try_from(json!([2024, 1, 1])).expect_err("must fail");
        assert!(matches!(err, ValidationError::DateWrongType { found: "array" }));

        let err = DateInput::try_from(json!(-3)).expect_err("must fail");
        assert!(matches!(err, ValidationError::TimestampNotInteger { .. }));
    }

    #[test]
    fn plain_integer_literals_are_timestamps() {
        assert_eq!(
            DateInput::try_from(1_700_000_000).expect("positive literal is accepted"),
            DateInput::Timestamp(1_700_000_000)
        );

        let err = DateInput::try_from(-1).expect_err("must fail");
        assert!(matches!(err, ValidationError::TimestampNotInteger { .. }));
    }
}
