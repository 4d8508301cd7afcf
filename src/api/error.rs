//! Error handling for the backend API module

use thiserror::Error;

/// One taxonomy for everything that can go wrong in a refresh cycle: network
/// failures, non-2xx responses, and malformed payloads are all handled the
/// same way by the poller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to decode a JSON payload from the backend
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// An error occurred while processing the request.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }
}
