//! Search sub-client — best-effort autocomplete.

use crate::client::StockClient;
use crate::domain::search::SymbolMatch;

/// Sub-client for symbol search.
pub struct Search<'a> {
    pub(crate) client: &'a StockClient,
}

impl<'a> Search<'a> {
    /// Fetch autocomplete suggestions for a prefix.
    ///
    /// Suggestions are best-effort: an empty prefix short-circuits to an
    /// empty list without a network call, and any transport or service
    /// failure is logged and degrades to an empty list.
    pub async fn suggest(&self, prefix: &str) -> Vec<SymbolMatch> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Vec::new();
        }

        match self.client.http.get_autocomplete(prefix).await {
            Ok(resp) => resp.into_matches(),
            Err(e) => {
                tracing::warn!("Autocomplete lookup failed for {:?}: {}", prefix, e);
                Vec::new()
            }
        }
    }
}
