//! Conversion from search wire types to `SymbolMatch` suggestions.

use super::wire::SearchResponse;
use super::SymbolMatch;

impl SearchResponse {
    /// Keep entries that carry both a symbol and a display name, preserving
    /// service order. `shortname` wins over `longname` when both are set.
    pub fn into_matches(self) -> Vec<SymbolMatch> {
        self.quotes
            .into_iter()
            .filter_map(|q| {
                let symbol = q.symbol?;
                let display_name = q.shortname.or(q.longname)?;
                Some(SymbolMatch {
                    symbol,
                    display_name,
                    exchange: q.exchange,
                })
            })
            .collect()
    }
}
