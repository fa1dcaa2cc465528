use std::convert::Infallible;

use thiserror::Error;

use crate::http_client::HttpError;

/// Input validation failures raised before any request leaves the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please supply a valid api key")]
    CredentialsMissing,
    #[error("Api Key must be a string, got {found}")]
    CredentialsWrongType { found: &'static str },

    #[error("Invalid Argument: must be an integer, a string or a date, got {found}")]
    DateWrongType { found: &'static str },
    #[error("Invalid Date Format: must be in the format YYYY-MM-DD: '{value}'")]
    DateFormat { value: String },
    #[error("timestamp must be a non-negative integer: '{value}'")]
    TimestampNotInteger { value: String },

    #[error("Year should be a number or a string, got {found}")]
    YearWrongType { found: &'static str },
    #[error("Year should be a number with four digits: '{value}'")]
    YearFormat { value: String },

    #[error("Country must be a string, got {found}")]
    CountryWrongType { found: &'static str },
    #[error("Country is required")]
    CountryMissing,
}

impl ValidationError {
    /// Taxonomy bucket this validation failure is reported under.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CredentialsMissing => ErrorKind::CredentialsMissing,
            Self::CredentialsWrongType { .. } => ErrorKind::InvalidCredentials,
            Self::DateWrongType { .. }
            | Self::DateFormat { .. }
            | Self::TimestampNotInteger { .. }
            | Self::YearWrongType { .. }
            | Self::YearFormat { .. } => ErrorKind::InvalidDateOrTimestamp,
            Self::CountryWrongType { .. } | Self::CountryMissing => ErrorKind::InvalidCountry,
        }
    }
}

/// Closed set of failure categories callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    CredentialsMissing,
    InvalidCredentials,
    InvalidDateOrTimestamp,
    InvalidCountry,
    /// Anything the transport or the remote service reported that is not an
    /// authentication rejection.
    Upstream,
}

/// Top-level error returned by every client operation.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("{0}")]
    CredentialsMissing(String),

    #[error("{0}")]
    InvalidCredentials(String),

    #[error("{0}")]
    InvalidDateOrTimestamp(String),

    #[error("{0}")]
    InvalidCountry(String),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl OracleError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CredentialsMissing(_) => ErrorKind::CredentialsMissing,
            Self::InvalidCredentials(_) => ErrorKind::InvalidCredentials,
            Self::InvalidDateOrTimestamp(_) => ErrorKind::InvalidDateOrTimestamp,
            Self::InvalidCountry(_) => ErrorKind::InvalidCountry,
            Self::Http(_) | Self::Status { .. } | Self::Decode(_) => ErrorKind::Upstream,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::CredentialsMissing(_) => "oracle.credentials_missing",
            Self::InvalidCredentials(_) => "oracle.invalid_credentials",
            Self::InvalidDateOrTimestamp(_) => "oracle.invalid_date_or_timestamp",
            Self::InvalidCountry(_) => "oracle.invalid_country",
            Self::Http(_) => "oracle.transport",
            Self::Status { .. } => "oracle.status",
            Self::Decode(_) => "oracle.decode",
        }
    }
}

impl From<ValidationError> for OracleError {
    fn from(error: ValidationError) -> Self {
        let message = error.to_string();
        match error {
            ValidationError::CredentialsMissing => Self::CredentialsMissing(message),
            ValidationError::CredentialsWrongType { .. } => Self::InvalidCredentials(message),
            ValidationError::DateWrongType { .. }
            | ValidationError::DateFormat { .. }
            | ValidationError::TimestampNotInteger { .. }
            | ValidationError::YearWrongType { .. }
            | ValidationError::YearFormat { .. } => Self::InvalidDateOrTimestamp(message),
            ValidationError::CountryWrongType { .. } | ValidationError::CountryMissing => {
                Self::InvalidCountry(message)
            }
        }
    }
}

// Lets infallible `From` conversions satisfy the same bounds as `TryFrom` ones.
impl From<Infallible> for OracleError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
