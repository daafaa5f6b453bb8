//! Network URL constants for the StockAI client.

/// Default REST API base URL (a locally served StockAI backend).
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
