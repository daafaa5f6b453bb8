//! Quotes sub-client — realtime price lookup.

use crate::client::StockClient;
use crate::domain::quote::Quote;
use crate::error::ClientError;
use crate::shared::Symbol;

/// Sub-client for realtime quote operations.
pub struct Quotes<'a> {
    pub(crate) client: &'a StockClient,
}

impl<'a> Quotes<'a> {
    /// Fetch the latest price for a symbol.
    ///
    /// Errors surface to the caller: the initial quote gates session start,
    /// so failures must be reported rather than swallowed.
    pub async fn realtime(&self, symbol: &Symbol) -> Result<Quote, ClientError> {
        let resp = self.client.http.get_realtime(symbol.as_str()).await?;
        Ok(resp.into())
    }
}
