//! Symbol search domain — autocomplete suggestions.

pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

/// A single autocomplete suggestion, in service order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolMatch {
    /// Raw service symbol, passed through verbatim for display. Normalized
    /// into a [`Symbol`](crate::shared::Symbol) only when the user picks it.
    pub symbol: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
}
