//! Metric client
//!
//! Read-only access to the productivity backend: the current score and the
//! daily series that feeds the chart.

mod error;
mod wire;

pub use error::FetchError;
pub use wire::{decode_productivity, decode_series, ProductivityResponse, SeriesResponse};

use reqwest::{Client, Response};

use crate::core::config::ApiConfig;
use crate::series::SeriesPoint;

#[derive(Debug, Clone)]
pub struct MetricClient {
    client: Client,
    productivity_url: String,
    series_url: String,
}

impl MetricClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_http_client()?,
            productivity_url: config.productivity_url(),
            series_url: config.series_url(),
        })
    }

    /// Current productivity score in percentage points (`0.042` → `4.2`).
    pub async fn fetch_productivity(&self) -> Result<f64, FetchError> {
        let bytes = self.get_bytes(&self.productivity_url).await?;
        decode_productivity(&bytes)
    }

    /// Daily series, ascending by date.
    pub async fn fetch_series(&self) -> Result<Vec<SeriesPoint>, FetchError> {
        let bytes = self.get_bytes(&self.series_url).await?;
        decode_series(&bytes)
    }

    async fn handle_response_status(response: Response) -> Result<Response, FetchError> {
        if !response.status().is_success() {
            return Err(FetchError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> Result<Client, FetchError> {
    use std::time::Duration;

    Ok(Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(10))
        .user_agent(concat!("friday-meter/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

// The browser owns timeouts and the user agent for fetch().
#[cfg(target_arch = "wasm32")]
fn build_http_client() -> Result<Client, FetchError> {
    Ok(Client::builder().build()?)
}
