//! Live price domain — sliding window state and the polling session.

pub mod session;
pub mod window;

use crate::domain::quote::Quote;
use crate::shared::{Symbol, Trend};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use session::{LiveController, SessionState};
pub use window::SlidingWindow;

/// Default number of points kept on the live chart.
pub const WINDOW_POINTS: usize = 20;

/// Default period between realtime polls.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// A single timestamped price on the live chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// Render-ready payload delivered after each successful poll.
#[derive(Debug, Clone)]
pub struct LiveUpdate {
    pub symbol: Symbol,
    pub quote: Quote,
    pub trend: Trend,
    /// Window snapshot, oldest first. Owned copy — never aliases the
    /// session's buffer.
    pub points: Vec<PricePoint>,
}

/// Events emitted by a [`LiveController`] to the presentation layer.
#[derive(Debug, Clone)]
pub enum LiveEvent {
    /// A session entered polling for this symbol.
    Started { symbol: Symbol },
    /// New data: redraw.
    Update(LiveUpdate),
    /// The session for this symbol was torn down.
    Stopped { symbol: Symbol },
}

/// Configuration for live polling sessions.
#[derive(Debug, Clone)]
pub struct LiveConfig {
    pub poll_interval: Duration,
    pub window_points: usize,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            poll_interval: POLL_INTERVAL,
            window_points: WINDOW_POINTS,
        }
    }
}
