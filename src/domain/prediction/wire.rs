//! Wire types for prediction responses (REST).

use serde::{Deserialize, Serialize};

/// Per-model RMSE block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RmseResponse {
    #[serde(rename = "MA")]
    pub ma: f64,
    #[serde(rename = "ARMA")]
    pub arma: f64,
    #[serde(rename = "ARIMA")]
    pub arima: f64,
}

/// REST response for `/predict/{symbol}`.
///
/// All three series are required: a response missing one fails to decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(rename = "MA_Prediction")]
    pub ma_prediction: Vec<f64>,
    #[serde(rename = "ARMA_Prediction")]
    pub arma_prediction: Vec<f64>,
    #[serde(rename = "ARIMA_Prediction")]
    pub arima_prediction: Vec<f64>,
    #[serde(rename = "RMSE", skip_serializing_if = "Option::is_none")]
    pub rmse: Option<RmseResponse>,
}
