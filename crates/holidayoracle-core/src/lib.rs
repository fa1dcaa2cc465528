//! # HolidayOracle Core
//!
//! Client for the HolidayOracle date and holiday API.
//!
//! ## Overview
//!
//! This crate validates and normalizes query arguments, builds the request
//! envelope, and sends it with bearer authentication:
//!
//! - **Typed inputs** for dates, years, country codes and credentials
//! - **Validators** that run before any network I/O
//! - **Request envelope** merging caller options with required fields
//! - **Authenticated transport** that unwraps the `data` payload
//! - **Error taxonomy** callers can branch on
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | The four public operations |
//! | [`config`] | Base URL, operation paths, validation mode |
//! | [`domain`] | Typed argument forms |
//! | [`envelope`] | Request and response envelopes |
//! | [`error`] | Error taxonomy |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`transport`] | Authenticated submit pipeline |
//! | [`validation`] | Pure input validators |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use holidayoracle_core::HolidayOracleClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HolidayOracleClient::new("my-api-key")?;
//!
//!     // Argument errors surface here, before anything is sent...
//!     let pending = client.date("2024-01-26", "AU", None)?;
//!
//!     // ...transport and auth errors surface here.
//!     let payload = pending.await?;
//!     println!("{payload}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │ HolidayOracleClient │  date / holidays / locations / business_days
//! └──────────┬──────────┘
//!            │ validate ─▶ normalize ─▶ RequestEnvelope
//!            ▼
//! ┌─────────────────────┐
//! │ AuthenticatedTrans. │  bearer header, 401 ─▶ InvalidCredentials
//! └──────────┬──────────┘
//!            ▼
//! ┌─────────────────────┐
//! │ HttpClient          │  reqwest (default) or injected
//! └─────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use holidayoracle_core::{ErrorKind, OracleError};
//!
//! fn describe(error: &OracleError) -> &'static str {
//!     match error.kind() {
//!         ErrorKind::CredentialsMissing | ErrorKind::InvalidCredentials => "check the api key",
//!         ErrorKind::InvalidDateOrTimestamp => "fix the date argument",
//!         ErrorKind::InvalidCountry => "fix the country argument",
//!         ErrorKind::Upstream => "the service or network failed",
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The API key is only ever written to the `Authorization` header
//! - `Debug` output and log events never include the key

pub mod client;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod transport;
pub mod validation;

pub use client::{HolidayOracleClient, PendingPayload};

pub use config::{ClientConfig, Operation, OperationPaths, DEFAULT_BASE_URL};

pub use domain::{normalize_date, CountryCode, Credentials, DateInput, QueryOptions, YearInput};

pub use envelope::{RequestEnvelope, ResponseEnvelope};

pub use error::{ErrorKind, OracleError, ValidationError};

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use transport::AuthenticatedTransport;

pub use validation::{ValidationMode, Validator};
