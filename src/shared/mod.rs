//! Shared newtypes and display helpers used across all domain modules.
//!
//! `Symbol` is serialization-transparent: it serializes/deserializes as the
//! bare string the backend sends, so it can be used directly in wire types
//! without conversion overhead.

pub mod fmt;

use crate::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// Newtype for ticker symbols (e.g. `"AAPL"`, `"TCS.NS"`).
///
/// Non-empty by construction and normalized to ASCII uppercase, matching the
/// backend's own symbol handling. Immutable once a session is created from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Validate and normalize a raw user-typed symbol.
    pub fn new(s: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = s.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::new(s)
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Symbol::new(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Trend ───────────────────────────────────────────────────────────────────

/// Price-change classification for presentation styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Classify a price change. Zero counts as `Up` (no change indicated).
    pub fn from_change(change: f64) -> Self {
        if change >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    /// Style-class name used by the presentation layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
