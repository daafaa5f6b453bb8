//! Conversion and validation from prediction wire types to `PredictionSet`.

use super::wire::PredictionResponse;
use super::{ModelScores, PredictionSet, FORECAST_DAYS};
use crate::error::ValidationError;
use crate::shared::Symbol;

fn check_len(model: &'static str, series: &[f64]) -> Result<(), ValidationError> {
    if series.len() != FORECAST_DAYS {
        return Err(ValidationError::SeriesLength {
            model,
            expected: FORECAST_DAYS,
            actual: series.len(),
        });
    }
    Ok(())
}

impl TryFrom<PredictionResponse> for PredictionSet {
    type Error = ValidationError;

    fn try_from(r: PredictionResponse) -> Result<Self, Self::Error> {
        check_len("MA", &r.ma_prediction)?;
        check_len("ARMA", &r.arma_prediction)?;
        check_len("ARIMA", &r.arima_prediction)?;

        Ok(Self {
            symbol: r.symbol.and_then(|s| Symbol::new(s).ok()),
            ma: r.ma_prediction,
            arma: r.arma_prediction,
            arima: r.arima_prediction,
            scores: r.rmse.map(|m| ModelScores {
                ma: m.ma,
                arma: m.arma,
                arima: m.arima,
            }),
        })
    }
}
