//! Prediction domain — 30-day model forecasts for the static chart.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::Symbol;
use serde::{Deserialize, Serialize};

/// Number of forecast days returned per model.
pub const FORECAST_DAYS: usize = 30;

/// Per-model RMSE scores reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelScores {
    pub ma: f64,
    pub arma: f64,
    pub arima: f64,
}

/// A validated set of 30-day forecasts, one series per model.
///
/// Every series holds exactly [`FORECAST_DAYS`] values aligned to the
/// `Day 1..Day 30` labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSet {
    /// Symbol as resolved by the service, which may have probed exchange
    /// suffixes (e.g. `TCS` → `TCS.NS`).
    pub symbol: Option<Symbol>,
    pub ma: Vec<f64>,
    pub arma: Vec<f64>,
    pub arima: Vec<f64>,
    pub scores: Option<ModelScores>,
}

impl PredictionSet {
    /// X-axis labels for the forecast chart: `"Day 1"` through `"Day 30"`.
    pub fn labels() -> Vec<String> {
        (1..=FORECAST_DAYS).map(|d| format!("Day {}", d)).collect()
    }
}
