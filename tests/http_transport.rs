//! End-to-end tests of the reqwest transport against a local stub oracle.
//!
//! The stub checks the bearer token and echoes the request body back inside
//! the `data` field, so each test sees exactly what went over the wire.

use std::net::SocketAddr;

use axum::{
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use holidayoracle_core::{ClientConfig, Credentials, ErrorKind, HolidayOracleClient, OracleError};
use serde_json::{json, Value};
use tokio::net::TcpListener;

const API_KEY: &str = "test-key";

async fn echo(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let expected = format!("Bearer {API_KEY}");
    let authorized = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        == Some(expected.as_str());
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Unauthenticated."})),
        );
    }

    (StatusCode::OK, Json(json!({"data": body})))
}

async fn unavailable() -> (StatusCode, &'static str) {
    (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance")
}

async fn spawn_stub() -> SocketAddr {
    let app = Router::new()
        .route("/api/v1/date", post(echo))
        .route("/api/v1/date/holidays", post(echo))
        .route("/api/v1/date/locations", post(echo))
        .route("/api/v1/date/business-days", post(unavailable));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("stub should bind");
    let addr = listener.local_addr().expect("stub has an address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub should serve");
    });
    addr
}

fn client_for(addr: SocketAddr, key: &str) -> HolidayOracleClient {
    let config = ClientConfig::new(Credentials::try_from(key).expect("valid key"))
        .with_base_url(format!("http://{addr}/api/v1/"));
    HolidayOracleClient::with_config(config)
}

#[tokio::test]
async fn date_lookup_round_trips_through_reqwest() {
    let addr = spawn_stub().await;
    let client = client_for(addr, API_KEY);

    let payload = client
        .date("2024-01-26", "AU", None)
        .expect("inputs are valid")
        .await
        .expect("stub should answer");

    assert_eq!(payload, json!({"date": "2024-01-26", "country": "AU"}));
}

#[tokio::test]
async fn holidays_year_is_sent_as_text() {
    let addr = spawn_stub().await;
    let client = client_for(addr, API_KEY);

    let payload = client
        .holidays(2024, "NZ", None)
        .expect("inputs are valid")
        .await
        .expect("stub should answer");

    assert_eq!(payload, json!({"year": "2024", "country": "NZ"}));
}

#[tokio::test]
async fn locations_posts_an_empty_object() {
    let addr = spawn_stub().await;
    let client = client_for(addr, API_KEY);

    let payload = client.locations().await.expect("stub should answer");

    assert_eq!(payload, json!({}));
}

#[tokio::test]
async fn wrong_key_is_reported_as_invalid_credentials() {
    let addr = spawn_stub().await;
    let client = client_for(addr, "wrong-key");

    let error = client
        .locations()
        .await
        .expect_err("stub rejects the key");

    assert_eq!(error.kind(), ErrorKind::InvalidCredentials);
}

#[tokio::test]
async fn server_errors_keep_status_and_body() {
    let addr = spawn_stub().await;
    let client = client_for(addr, API_KEY);

    let error = client
        .business_days("2024-01-01", "2024-01-31", "AU", None)
        .expect("inputs are valid")
        .await
        .expect_err("stub is unavailable");

    assert!(
        matches!(error, OracleError::Status { status: 503, ref body } if body == "down for maintenance"),
        "{error:?}"
    );
}

#[tokio::test]
async fn unreachable_host_surfaces_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("should bind");
    let addr = listener.local_addr().expect("has an address");
    drop(listener);

    let client = client_for(addr, API_KEY);
    let error = client
        .locations()
        .await
        .expect_err("nothing is listening");

    assert!(matches!(error, OracleError::Http(_)), "{error:?}");
    assert_eq!(error.kind(), ErrorKind::Upstream);
}
