//! Input validators run before any request is built.
//!
//! Every function here is pure. The oracle historically accepted date and
//! year text as long as the expected digit pattern appeared *somewhere* in
//! it (`"2023-01-0199999"` passes). [`ValidationMode::Lenient`] keeps that
//! behavior and is the default; [`ValidationMode::Strict`] requires the whole
//! text to match and, for dates, to name a real calendar day.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::{Date, Month};

use crate::domain::{normalize_date, DateInput, YearInput};
use crate::ValidationError;

static TIMESTAMP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("timestamp pattern is valid"));
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("date pattern is valid"));
static STRICT_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("strict date pattern is valid")
});
static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("year pattern is valid"));
static STRICT_YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("strict year pattern is valid"));

/// How strictly date and year text is matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Pattern may appear anywhere in the text.
    #[default]
    Lenient,
    /// Whole text must match; dates must exist on the calendar.
    Strict,
}

/// Mode-aware validator shared by all operations of a client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    mode: ValidationMode,
}

impl Validator {
    pub const fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub const fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Check a single-date argument and produce its wire value.
    ///
    /// Text must be an all-digit timestamp or carry a `YYYY-MM-DD` date and is
    /// sent unchanged. Numeric timestamps stay numbers. Native dates become
    /// canonical text.
    pub fn date_or_timestamp(&self, input: DateInput) -> Result<Value, ValidationError> {
        match input {
            DateInput::Text(text) => {
                if TIMESTAMP_PATTERN.is_match(&text) || self.is_date_text(&text) {
                    Ok(Value::String(text))
                } else {
                    Err(ValidationError::DateFormat { value: text })
                }
            }
            DateInput::Timestamp(seconds) => Ok(Value::from(seconds)),
            DateInput::Date(date) => Ok(Value::String(normalize_date(date))),
        }
    }

    /// Check one end of a business-day range. Text must carry a date;
    /// all-digit text is not accepted here. Non-text values skip the text check.
    pub fn range_endpoint(&self, input: DateInput) -> Result<Value, ValidationError> {
        match input {
            DateInput::Text(text) => {
                if self.is_date_text(&text) {
                    Ok(Value::String(text))
                } else {
                    Err(ValidationError::DateFormat { value: text })
                }
            }
            DateInput::Timestamp(seconds) => Ok(Value::from(seconds)),
            DateInput::Date(date) => Ok(Value::String(normalize_date(date))),
        }
    }

    /// Check a year argument and return its text form.
    pub fn year(&self, input: YearInput) -> Result<String, ValidationError> {
        let text = input.to_text();
        let matches = match self.mode {
            ValidationMode::Lenient => YEAR_PATTERN.is_match(&text),
            ValidationMode::Strict => STRICT_YEAR_PATTERN.is_match(&text),
        };

        if matches {
            Ok(text)
        } else {
            Err(ValidationError::YearFormat { value: text })
        }
    }

    fn is_date_text(&self, text: &str) -> bool {
        match self.mode {
            ValidationMode::Lenient => DATE_PATTERN.is_match(text),
            ValidationMode::Strict => parse_calendar_date(text).is_some(),
        }
    }
}

fn parse_calendar_date(text: &str) -> Option<Date> {
    let captures = STRICT_DATE_PATTERN.captures(text)?;
    let year = captures[1].parse::<i32>().ok()?;
    let month = captures[2].parse::<u8>().ok()?;
    let day = captures[3].parse::<u8>().ok()?;
    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient() -> Validator {
        Validator::default()
    }

    fn strict() -> Validator {
        Validator::new(ValidationMode::Strict)
    }

    #[test]
    fn canonical_date_text_passes_unchanged() {
        let value = lenient()
            .date_or_timestamp(DateInput::from("2023-03-05"))
            .expect("canonical date is valid");
        assert_eq!(value, Value::from("2023-03-05"));

        let value = strict()
            .date_or_timestamp(DateInput::from("2023-03-05"))
            .expect("canonical date is valid");
        assert_eq!(value, Value::from("2023-03-05"));
    }

    #[test]
    fn digit_text_is_a_timestamp() {
        let value = lenient()
            .date_or_timestamp(DateInput::from("1700000000"))
            .expect("timestamp text is valid");
        assert_eq!(value, Value::from("1700000000"));
    }

    #[test]
    fn numeric_timestamp_stays_a_number() {
        let value = lenient()
            .date_or_timestamp(DateInput::Timestamp(1_700_000_000))
            .expect("timestamp is valid");
        assert_eq!(value, Value::from(1_700_000_000_u64));
    }

    #[test]
    fn rejects_text_without_date_or_digits() {
        for input in ["avcd", "209kka", "", "2023/03/05"] {
            let err = lenient()
                .date_or_timestamp(DateInput::from(input))
                .expect_err("must fail");
            assert!(matches!(err, ValidationError::DateFormat { .. }), "{input}");
        }
    }

    #[test]
    fn lenient_mode_accepts_embedded_pattern() {
        assert!(lenient()
            .date_or_timestamp(DateInput::from("2023-01-0199999"))
            .is_ok());
        assert!(lenient().year(YearInput::from("x2024x")).is_ok());
    }

    #[test]
    fn strict_mode_requires_whole_real_date() {
        assert!(strict()
            .date_or_timestamp(DateInput::from("2023-01-0199999"))
            .is_err());
        assert!(strict()
            .date_or_timestamp(DateInput::from("2023-02-30"))
            .is_err());
        assert!(strict().year(YearInput::from("x2024x")).is_err());
        assert!(strict().year(YearInput::from(2024)).is_ok());
    }

    #[test]
    fn native_dates_are_normalized() {
        let date = Date::from_calendar_date(2021, Month::July, 4).expect("valid date");
        let value = strict()
            .range_endpoint(DateInput::from(date))
            .expect("native dates bypass the text check");
        assert_eq!(value, Value::from("2021-07-04"));
    }

    #[test]
    fn range_endpoint_rejects_digit_only_text() {
        let err = lenient()
            .range_endpoint(DateInput::from("1700000000"))
            .expect_err("range endpoints need a date");
        assert!(matches!(err, ValidationError::DateFormat { .. }));
    }

    #[test]
    fn only_ascii_digits_count() {
        for validator in [lenient(), strict()] {
            for input in ["١٧٠٠٠٠٠٠٠٠", "٢٠٢٣-٠١-٠١"] {
                let err = validator
                    .date_or_timestamp(DateInput::from(input))
                    .expect_err("non-ASCII digits are not a date");
                assert!(matches!(err, ValidationError::DateFormat { .. }), "{input}");
            }

            let err = validator
                .range_endpoint(DateInput::from("２０２３-０１-０１"))
                .expect_err("fullwidth digits are not a date");
            assert!(matches!(err, ValidationError::DateFormat { .. }));

            let err = validator
                .year(YearInput::from("२०२४"))
                .expect_err("devanagari digits are not a year");
            assert!(matches!(err, ValidationError::YearFormat { .. }));
        }
    }

    #[test]
    fn default_validator_is_lenient() {
        assert_eq!(lenient().mode(), ValidationMode::Lenient);
        assert_eq!(strict().mode(), ValidationMode::Strict);
    }

    #[test]
    fn year_needs_four_digits() {
        assert_eq!(lenient().year(YearInput::from(2006)).as_deref(), Ok("2006"));

        for input in [YearInput::from("avcd"), YearInput::from("209kka"), YearInput::from(99)] {
            let err = lenient().year(input).expect_err("must fail");
            assert!(matches!(err, ValidationError::YearFormat { .. }));
        }
    }
}
