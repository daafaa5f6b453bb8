//! Predictions sub-client — model forecast lookup.

use crate::client::StockClient;
use crate::domain::prediction::PredictionSet;
use crate::error::ClientError;
use crate::shared::Symbol;

/// Sub-client for forecast operations.
pub struct Predictions<'a> {
    pub(crate) client: &'a StockClient,
}

impl<'a> Predictions<'a> {
    /// Fetch the 30-day forecast set for a symbol.
    ///
    /// The first request for an untrained symbol can take the backend a
    /// while (it trains and persists the models before answering).
    pub async fn forecast(&self, symbol: &Symbol) -> Result<PredictionSet, ClientError> {
        let resp = self.client.http.get_prediction(symbol.as_str()).await?;
        let set = PredictionSet::try_from(resp)?;
        Ok(set)
    }
}
