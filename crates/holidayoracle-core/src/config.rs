use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::Credentials;
use crate::validation::ValidationMode;

/// Production API root used when no override is supplied.
pub const DEFAULT_BASE_URL: &str = "https://holidayoracle.io/api/v1";

/// Logical operations exposed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Date,
    Holidays,
    Locations,
    BusinessDays,
}

impl Operation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Holidays => "holidays",
            Self::Locations => "locations",
            Self::BusinessDays => "business_days",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Endpoint path per operation, relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationPaths {
    pub date: String,
    pub holidays: String,
    pub locations: String,
    pub business_days: String,
}

impl Default for OperationPaths {
    fn default() -> Self {
        Self {
            date: String::from("date"),
            holidays: String::from("date/holidays"),
            locations: String::from("date/locations"),
            business_days: String::from("date/business-days"),
        }
    }
}

impl OperationPaths {
    pub fn path(&self, operation: Operation) -> &str {
        match operation {
            Operation::Date => &self.date,
            Operation::Holidays => &self.holidays,
            Operation::Locations => &self.locations,
            Operation::BusinessDays => &self.business_days,
        }
    }
}

/// Immutable client configuration: where to send requests and as whom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    credentials: Credentials,
    paths: OperationPaths,
    validation: ValidationMode,
}

impl ClientConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            credentials,
            paths: OperationPaths::default(),
            validation: ValidationMode::default(),
        }
    }

    /// Point the client at another deployment. A blank URL keeps the current
    /// one; a trailing `/` is dropped.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        let trimmed = base_url.as_ref().trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            self.base_url = trimmed.to_owned();
        }
        self
    }

    pub fn with_paths(mut self, paths: OperationPaths) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn paths(&self) -> &OperationPaths {
        &self.paths
    }

    pub const fn validation(&self) -> ValidationMode {
        self.validation
    }

    /// Absolute URL for an endpoint path.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
