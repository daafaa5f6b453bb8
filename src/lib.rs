//! # StockAI Client
//!
//! A Rust client for the StockAI prediction service: ticker autocomplete,
//! 30-day model forecasts (MA / ARMA / ARIMA), and a live price feed backed
//! by a bounded sliding-window chart buffer.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — shared newtypes, domain models, error taxonomy
//! 2. **HTTP API** — `StockHttp`, one method per REST endpoint
//! 3. **Live session** — `LiveController`: the recurring poll loop and
//!    sliding window behind an event stream
//! 4. **High-Level Client** — `StockClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockai_client::prelude::*;
//!
//! let client = StockClient::builder()
//!     .base_url("http://127.0.0.1:8000")
//!     .build()?;
//!
//! let symbol = Symbol::new("aapl")?;
//! let forecast = client.predictions().forecast(&symbol).await?;
//!
//! let mut live = client.live();
//! let initial = live.start(symbol).await?;
//! // drain live.events() and redraw on each LiveEvent::Update
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and display helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified client error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client, one method per endpoint.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `StockClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Symbol, Trend};

    // Domain types — quote
    pub use crate::domain::quote::Quote;

    // Domain types — prediction
    pub use crate::domain::prediction::{ModelScores, PredictionSet, FORECAST_DAYS};

    // Domain types — search
    pub use crate::domain::search::SymbolMatch;

    // Domain types — live session
    pub use crate::domain::live::{
        LiveConfig, LiveController, LiveEvent, LiveUpdate, PricePoint, SessionState,
        SlidingWindow, POLL_INTERVAL, WINDOW_POINTS,
    };

    // Errors
    pub use crate::error::{ClientError, HttpError, ValidationError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Client + sub-clients
    pub use crate::client::{Predictions, Quotes, Search, StockClient, StockClientBuilder};
}
