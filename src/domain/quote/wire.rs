//! Wire types for realtime quote responses (REST).

use serde::{Deserialize, Serialize};

/// REST response for `/realtime/{symbol}`.
///
/// Carries the full payload the backend reports; only `current` and
/// `prev_close` feed the domain [`Quote`](super::Quote).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RealtimeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub current: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_close: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    /// Backend-local time of the last sample, `"%Y-%m-%d %H:%M:%S"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}
