//! Low-level HTTP client — `StockHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain
//! types happens at the sub-client boundary). Internal to the crate —
//! `StockClient` wraps this.
//!
//! Calls are single-shot: retry policy, where one exists, belongs to the
//! recurring poll loop, not to this layer.

use crate::domain::prediction::wire::PredictionResponse;
use crate::domain::quote::wire::RealtimeResponse;
use crate::domain::search::wire::SearchResponse;
use crate::error::HttpError;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the StockAI REST API.
#[derive(Clone)]
pub struct StockHttp {
    base_url: String,
    client: Client,
}

impl StockHttp {
    pub fn new(base_url: &str) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(4);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    // ── Autocomplete ─────────────────────────────────────────────────────

    pub async fn get_autocomplete(&self, prefix: &str) -> Result<SearchResponse, HttpError> {
        let url = format!(
            "{}/autocomplete/{}",
            self.base_url,
            urlencoding::encode(prefix)
        );
        self.get(&url).await
    }

    // ── Prediction ───────────────────────────────────────────────────────

    pub async fn get_prediction(&self, symbol: &str) -> Result<PredictionResponse, HttpError> {
        let url = format!("{}/predict/{}", self.base_url, urlencoding::encode(symbol));
        self.get(&url).await
    }

    // ── Realtime ─────────────────────────────────────────────────────────

    pub async fn get_realtime(&self, symbol: &str) -> Result<RealtimeResponse, HttpError> {
        let url = format!("{}/realtime/{}", self.base_url, urlencoding::encode(symbol));
        self.get(&url).await
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
