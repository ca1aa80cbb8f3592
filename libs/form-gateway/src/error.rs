//! Error types for the data-layer boundary.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server rejected the request: {status} {message}")]
    Status { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
