//! Trading Bot API Client
//!
//! A read-only JSON client for the backend's dashboard endpoints.

use crate::api::Backend;
use crate::api::error::ApiError;
use crate::api::models::{Decision, PortfolioHistoryPoint, PortfolioSnapshot, Trade};
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with dashboard version
const USER_AGENT: &str = concat!("botdeck/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(Duration::from_secs(10))
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        serde_json::from_slice(&response_bytes).map_err(ApiError::Decode)
    }
}

#[async_trait::async_trait]
impl Backend for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn portfolio(&self) -> Result<PortfolioSnapshot, ApiError> {
        self.get_json("portfolio").await
    }

    async fn trades(&self) -> Result<Vec<Trade>, ApiError> {
        self.get_json("trades").await
    }

    async fn portfolio_history(&self) -> Result<Vec<PortfolioHistoryPoint>, ApiError> {
        self.get_json("portfolio-history").await
    }

    async fn latest_decision(&self) -> Result<Option<Decision>, ApiError> {
        self.get_json("latest-decision").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_segments() {
        let client = ApiClient::new(Environment::Custom {
            api_base_url: "http://example.com/api/".to_string(),
        });
        assert_eq!(
            client.build_url("/portfolio"),
            "http://example.com/api/portfolio"
        );
    }

    #[test]
    fn test_build_url_default_environment() {
        let client = ApiClient::new(Environment::Local);
        assert_eq!(
            client.build_url("trades"),
            "http://localhost:5000/api/trades"
        );
        assert_eq!(
            client.build_url("portfolio-history"),
            "http://localhost:5000/api/portfolio-history"
        );
    }
}
