//! Unified client error types.

use thiserror::Error;

/// Top-level client error.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
///
/// Transport failures and undecodable bodies both surface as `Reqwest`;
/// non-success statuses map to the typed variants below.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Input validation errors, rejected before any network call.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Symbol must not be empty")]
    EmptySymbol,

    #[error("{model} series has {actual} points, expected {expected}")]
    SeriesLength {
        model: &'static str,
        expected: usize,
        actual: usize,
    },
}
