//! Wire types for autocomplete responses (REST).

use serde::{Deserialize, Serialize};

/// One raw quote entry from the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteMatchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
}

/// REST response for `/autocomplete/{prefix}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub quotes: Vec<QuoteMatchResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_entries() {
        let json = r#"{"quotes": [
            {"symbol": "AAPL", "shortname": "Apple Inc.", "exchange": "NMS"},
            {"symbol": "AAPL.MX", "longname": "Apple Inc."},
            {"shortname": "No Symbol Corp."}
        ]}"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.quotes.len(), 3);
        assert_eq!(resp.quotes[1].longname.as_deref(), Some("Apple Inc."));
        assert!(resp.quotes[2].symbol.is_none());
    }

    #[test]
    fn test_missing_quotes_defaults_to_empty() {
        let resp: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.quotes.is_empty());
    }
}
