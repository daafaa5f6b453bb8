//! Realtime quote domain — latest price, change classification.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::Trend;
use serde::{Deserialize, Serialize};

/// Latest price for a symbol, with the previous close for change styling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub current: f64,
    pub previous_close: f64,
}

impl Quote {
    /// Price change since the previous close.
    pub fn change(&self) -> f64 {
        self.current - self.previous_close
    }

    /// Classification of [`change`](Self::change) for presentation.
    pub fn trend(&self) -> Trend {
        Trend::from_change(self.change())
    }
}
