//! Integration tests for the REST endpoint contracts against a mock
//! StockAI server.
//!
//! These exercise the full request → status mapping → wire decode →
//! domain conversion path for each endpoint.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stockai_client::prelude::*;

async fn client_for(server: &MockServer) -> StockClient {
    StockClient::builder()
        .base_url(&server.uri())
        .build()
        .expect("client should build")
}

/// Integer-valued series so float equality is exact.
fn forecast_series(base: f64) -> Vec<f64> {
    (1..=FORECAST_DAYS).map(|d| base + d as f64).collect()
}

// ─── Prediction ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn forecast_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/predict/AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "symbol": "AAPL",
            "MA_Prediction": forecast_series(150.0),
            "ARMA_Prediction": forecast_series(151.0),
            "ARIMA_Prediction": forecast_series(152.0),
            "RMSE": {"MA": 2.1, "ARMA": 1.7, "ARIMA": 1.4}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let symbol = Symbol::new("aapl").unwrap();
    let set = client.predictions().forecast(&symbol).await.unwrap();

    assert_eq!(set.symbol.unwrap().as_str(), "AAPL");
    assert_eq!(set.ma.len(), FORECAST_DAYS);
    assert_eq!(set.ma[0], 151.0);
    assert_eq!(set.arima[29], 182.0);
    assert_eq!(set.scores.unwrap().arima, 1.4);
    assert_eq!(PredictionSet::labels().len(), set.ma.len());
}

#[tokio::test]
async fn forecast_with_short_series_is_rejected() {
    let server = MockServer::start().await;
    let mut short = forecast_series(150.0);
    short.pop();
    Mock::given(method("GET"))
        .and(path("/predict/AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "MA_Prediction": short,
            "ARMA_Prediction": forecast_series(151.0),
            "ARIMA_Prediction": forecast_series(152.0)
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let symbol = Symbol::new("AAPL").unwrap();
    let err = client.predictions().forecast(&symbol).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Validation(ValidationError::SeriesLength {
            model: "MA",
            expected: 30,
            actual: 29,
        })
    ));
}

#[tokio::test]
async fn forecast_missing_series_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/predict/AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "MA_Prediction": forecast_series(150.0),
            "ARMA_Prediction": forecast_series(151.0)
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let symbol = Symbol::new("AAPL").unwrap();
    let err = client.predictions().forecast(&symbol).await.unwrap_err();

    // Undecodable body: surfaces at the HTTP layer, never as an empty series.
    assert!(matches!(err, ClientError::Http(HttpError::Reqwest(_))));
}

#[tokio::test]
async fn forecast_surfaces_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/predict/NOPE"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string("Invalid or unsupported stock symbol"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let symbol = Symbol::new("NOPE").unwrap();
    let err = client.predictions().forecast(&symbol).await.unwrap_err();

    match err {
        ClientError::Http(HttpError::NotFound(body)) => {
            assert!(body.contains("Invalid"));
        }
        other => panic!("expected NotFound, got: {other:?}"),
    }
}

// ─── Realtime ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn realtime_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/realtime/AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "symbol": "AAPL",
            "source": "yfinance",
            "current": 150.0,
            "prev_close": 148.0,
            "high": 151.2,
            "low": 149.1,
            "open": 149.5,
            "timestamp": "2024-06-03 15:59:00"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let symbol = Symbol::new("aapl").unwrap();
    let quote = client.quotes().realtime(&symbol).await.unwrap();

    assert_eq!(quote.current, 150.0);
    assert_eq!(quote.previous_close, 148.0);
    assert_eq!(quote.change(), 2.0);
    assert_eq!(quote.trend(), Trend::Up);
}

#[tokio::test]
async fn realtime_without_prev_close_reads_flat() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/realtime/AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"current": 150.0})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let symbol = Symbol::new("AAPL").unwrap();
    let quote = client.quotes().realtime(&symbol).await.unwrap();

    assert_eq!(quote.change(), 0.0);
    assert_eq!(quote.trend(), Trend::Up);
}

#[tokio::test]
async fn realtime_surfaces_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/realtime/AAPL"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Realtime fetch error"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let symbol = Symbol::new("AAPL").unwrap();
    let err = client.quotes().realtime(&symbol).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Http(HttpError::ServerError { status: 500, .. })
    ));
}

// ─── Autocomplete ────────────────────────────────────────────────────────────

#[tokio::test]
async fn autocomplete_returns_suggestions_in_service_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/autocomplete/AA"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "quotes": [
                {"symbol": "AAPL", "shortname": "Apple Inc.", "exchange": "NMS"},
                {"shortname": "No Symbol Corp."},
                {"symbol": "AAL", "longname": "American Airlines Group Inc."}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let matches = client.search().suggest("AA").await;

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].symbol, "AAPL");
    assert_eq!(matches[0].exchange.as_deref(), Some("NMS"));
    assert_eq!(matches[1].display_name, "American Airlines Group Inc.");
}

#[tokio::test]
async fn autocomplete_failure_degrades_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/autocomplete/AA"))
        .respond_with(ResponseTemplate::new(504).set_body_string("Yahoo API request timed out"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert!(client.search().suggest("AA").await.is_empty());
}

#[tokio::test]
async fn empty_prefix_skips_the_network() {
    let server = MockServer::start().await;

    let client = client_for(&server).await;
    assert!(client.search().suggest("").await.is_empty());
    assert!(client.search().suggest("   ").await.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty(), "degenerate prefix must not hit the wire");
}
