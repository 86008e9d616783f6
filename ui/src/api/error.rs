//! Error handling for the metric client

use thiserror::Error;

use crate::series::SeriesError;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure (DNS, connection refused, CORS, aborted request).
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// Body was not the JSON shape we expect.
    #[error("Malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Malformed series: {0}")]
    Series(#[from] SeriesError),
}

impl FetchError {
    pub async fn from_response(response: reqwest::Response) -> FetchError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        FetchError::Http { status, message }
    }
}
