//! Unified error types.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised while reading market state from the chain.
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Market not found: {0}")]
    MarketNotFound(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}
