//! Public operations of the HolidayOracle API.
//!
//! Every operation validates all of its arguments before touching the
//! network. Input problems are returned straight from the call; only a fully
//! validated request yields a [`PendingPayload`], whose own errors come from
//! the transport or the remote service.

use std::fmt::{Debug, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use crate::config::{ClientConfig, Operation};
use crate::domain::{CountryCode, Credentials, DateInput, QueryOptions, YearInput};
use crate::envelope::RequestEnvelope;
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::transport::AuthenticatedTransport;
use crate::validation::Validator;
use crate::OracleError;

/// In-flight request resolving to the response's `data` payload.
pub type PendingPayload<'a> =
    Pin<Box<dyn Future<Output = Result<Value, OracleError>> + Send + 'a>>;

/// Client for the HolidayOracle date API.
///
/// Cheap to clone and safe to share: all state is immutable configuration.
#[derive(Clone)]
pub struct HolidayOracleClient {
    transport: AuthenticatedTransport,
    validator: Validator,
}

impl HolidayOracleClient {
    /// Client for the production endpoint with the default reqwest transport.
    ///
    /// ```rust,ignore
    /// let client = HolidayOracleClient::new("my-api-key")?;
    /// let holidays = client.holidays(2024, "AU", None)?.await?;
    /// ```
    pub fn new<K>(credential: K) -> Result<Self, OracleError>
    where
        K: TryInto<Credentials>,
        OracleError: From<K::Error>,
    {
        let credentials = credential.try_into()?;
        Ok(Self::with_config(ClientConfig::new(credentials)))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(config: ClientConfig, http_client: Arc<dyn HttpClient>) -> Self {
        let validator = Validator::new(config.validation());
        Self {
            transport: AuthenticatedTransport::new(Arc::new(config), http_client),
            validator,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }

    /// Look up a single date (`date` endpoint).
    ///
    /// # Errors
    ///
    /// Returns synchronously with
    /// - [`OracleError::InvalidDateOrTimestamp`] when the date is neither an
    ///   all-digit timestamp nor `YYYY-MM-DD` text, or has the wrong type
    /// - [`OracleError::InvalidCountry`] when the country is not a non-empty
    ///   string
    pub fn date<D, C>(
        &self,
        date_or_timestamp: D,
        country: C,
        options: Option<&QueryOptions>,
    ) -> Result<PendingPayload<'_>, OracleError>
    where
        D: TryInto<DateInput>,
        OracleError: From<D::Error>,
        C: TryInto<CountryCode>,
        OracleError: From<C::Error>,
    {
        let envelope = rejected_input(
            Operation::Date,
            self.date_envelope(date_or_timestamp, country, options),
        )?;
        Ok(self.dispatch(Operation::Date, envelope))
    }

    /// List the holidays of a year (`date/holidays` endpoint).
    ///
    /// # Errors
    ///
    /// Returns synchronously with
    /// - [`OracleError::InvalidDateOrTimestamp`] when the year has no
    ///   four-digit form or the wrong type
    /// - [`OracleError::InvalidCountry`] when the country is not a non-empty
    ///   string
    pub fn holidays<Y, C>(
        &self,
        year: Y,
        country: C,
        options: Option<&QueryOptions>,
    ) -> Result<PendingPayload<'_>, OracleError>
    where
        Y: TryInto<YearInput>,
        OracleError: From<Y::Error>,
        C: TryInto<CountryCode>,
        OracleError: From<C::Error>,
    {
        let envelope = rejected_input(
            Operation::Holidays,
            self.holidays_envelope(year, country, options),
        )?;
        Ok(self.dispatch(Operation::Holidays, envelope))
    }

    /// List the locations the oracle supports (`date/locations` endpoint).
    pub fn locations(&self) -> PendingPayload<'_> {
        self.dispatch(Operation::Locations, RequestEnvelope::default())
    }

    /// Count business days between two dates (`date/business-days` endpoint).
    ///
    /// The order of `date1` and `date2` is not checked here.
    ///
    /// # Errors
    ///
    /// Returns synchronously with
    /// - [`OracleError::InvalidDateOrTimestamp`] when a textual endpoint is
    ///   not `YYYY-MM-DD` text, or an endpoint has the wrong type
    /// - [`OracleError::InvalidCountry`] when the country is not a non-empty
    ///   string
    pub fn business_days<D1, D2, C>(
        &self,
        date1: D1,
        date2: D2,
        country: C,
        options: Option<&QueryOptions>,
    ) -> Result<PendingPayload<'_>, OracleError>
    where
        D1: TryInto<DateInput>,
        OracleError: From<D1::Error>,
        D2: TryInto<DateInput>,
        OracleError: From<D2::Error>,
        C: TryInto<CountryCode>,
        OracleError: From<C::Error>,
    {
        let envelope = rejected_input(
            Operation::BusinessDays,
            self.business_days_envelope(date1, date2, country, options),
        )?;
        Ok(self.dispatch(Operation::BusinessDays, envelope))
    }

    fn date_envelope<D, C>(
        &self,
        date_or_timestamp: D,
        country: C,
        options: Option<&QueryOptions>,
    ) -> Result<RequestEnvelope, OracleError>
    where
        D: TryInto<DateInput>,
        OracleError: From<D::Error>,
        C: TryInto<CountryCode>,
        OracleError: From<C::Error>,
    {
        let date = self
            .validator
            .date_or_timestamp(date_or_timestamp.try_into()?)?;
        let country = country.try_into()?;

        Ok(RequestEnvelope::from_options(options)
            .set("date", date)
            .set("country", String::from(country)))
    }

    fn holidays_envelope<Y, C>(
        &self,
        year: Y,
        country: C,
        options: Option<&QueryOptions>,
    ) -> Result<RequestEnvelope, OracleError>
    where
        Y: TryInto<YearInput>,
        OracleError: From<Y::Error>,
        C: TryInto<CountryCode>,
        OracleError: From<C::Error>,
    {
        let year = self.validator.year(year.try_into()?)?;
        let country = country.try_into()?;

        Ok(RequestEnvelope::from_options(options)
            .set("year", year)
            .set("country", String::from(country)))
    }

    fn business_days_envelope<D1, D2, C>(
        &self,
        date1: D1,
        date2: D2,
        country: C,
        options: Option<&QueryOptions>,
    ) -> Result<RequestEnvelope, OracleError>
    where
        D1: TryInto<DateInput>,
        OracleError: From<D1::Error>,
        D2: TryInto<DateInput>,
        OracleError: From<D2::Error>,
        C: TryInto<CountryCode>,
        OracleError: From<C::Error>,
    {
        let date1 = self.validator.range_endpoint(date1.try_into()?)?;
        let date2 = self.validator.range_endpoint(date2.try_into()?)?;
        let country = country.try_into()?;

        Ok(RequestEnvelope::from_options(options)
            .set("date1", date1)
            .set("date2", date2)
            .set("country", String::from(country)))
    }

    fn dispatch(&self, operation: Operation, envelope: RequestEnvelope) -> PendingPayload<'_> {
        Box::pin(async move {
            let path = self.transport.config().paths().path(operation);
            self.transport.submit(path, envelope).await
        })
    }
}

impl Debug for HolidayOracleClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayOracleClient")
            .field("config", self.config())
            .finish_non_exhaustive()
    }
}

fn rejected_input<T>(
    operation: Operation,
    result: Result<T, OracleError>,
) -> Result<T, OracleError> {
    result.inspect_err(|error| {
        tracing::debug!(%operation, code = error.code(), "rejected invalid input");
    })
}
