//! HTTP layer — `StockHttp`, one method per StockAI REST endpoint.

pub mod client;

pub use client::StockHttp;
