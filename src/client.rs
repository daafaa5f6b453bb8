//! High-level client — `StockClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::live::session::LiveController;
use crate::domain::live::LiveConfig;
use crate::error::ClientError;
use crate::http::StockHttp;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::prediction::client::Predictions;
pub use crate::domain::quote::client::Quotes;
pub use crate::domain::search::client::Search;

/// The primary entry point for the StockAI client.
///
/// Provides nested sub-client accessors per domain — `client.search()`,
/// `client.predictions()`, `client.quotes()` — plus [`live`](Self::live)
/// for the polling session controller.
#[derive(Clone)]
pub struct StockClient {
    pub(crate) http: StockHttp,
    pub(crate) live_config: LiveConfig,
}

impl StockClient {
    pub fn builder() -> StockClientBuilder {
        StockClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn search(&self) -> Search<'_> {
        Search { client: self }
    }

    pub fn predictions(&self) -> Predictions<'_> {
        Predictions { client: self }
    }

    pub fn quotes(&self) -> Quotes<'_> {
        Quotes { client: self }
    }

    /// Create a live session controller from the current config.
    ///
    /// The controller is intentionally not embedded in `StockClient`
    /// because session lifetimes are typically managed at the application
    /// layer (e.g. tied to the live chart component's lifecycle).
    pub fn live(&self) -> LiveController {
        LiveController::new(self.http.clone(), self.live_config.clone())
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct StockClientBuilder {
    base_url: String,
    poll_interval: Duration,
    window_points: usize,
}

impl Default for StockClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            poll_interval: crate::domain::live::POLL_INTERVAL,
            window_points: crate::domain::live::WINDOW_POINTS,
        }
    }
}

impl StockClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn window_points(mut self, points: usize) -> Self {
        self.window_points = points;
        self
    }

    pub fn build(self) -> Result<StockClient, ClientError> {
        Ok(StockClient {
            http: StockHttp::new(&self.base_url),
            live_config: LiveConfig {
                poll_interval: self.poll_interval,
                window_points: self.window_points,
            },
        })
    }
}
