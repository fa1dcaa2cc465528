//! Shared transport doubles for behavior tests.

#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use holidayoracle_core::{
    ClientConfig, Credentials, HolidayOracleClient, HttpClient, HttpError, HttpRequest,
    HttpResponse,
};
use serde_json::Value;

/// Answers every request with the same canned result and remembers what it
/// was asked.
#[derive(Debug)]
pub struct RecordingHttpClient {
    response: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    pub fn answering(response: Result<HttpResponse, HttpError>) -> Arc<Self> {
        Arc::new(Self {
            response,
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Respond with `{"data": <data>}` and status 200.
    pub fn with_data(data: Value) -> Arc<Self> {
        Self::answering(Ok(HttpResponse::ok_json(
            serde_json::json!({ "data": data }).to_string(),
        )))
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    pub fn sent_bodies(&self) -> Vec<Value> {
        self.recorded_requests()
            .iter()
            .map(|request| {
                serde_json::from_str(request.body.as_deref().unwrap_or("null"))
                    .expect("request body should be JSON")
            })
            .collect()
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

pub fn client_with(http: Arc<RecordingHttpClient>) -> HolidayOracleClient {
    let credentials = Credentials::try_from("abcd").expect("valid key");
    HolidayOracleClient::with_http_client(ClientConfig::new(credentials), http)
}
