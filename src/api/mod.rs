use crate::api::error::ApiError;
use crate::api::models::{Decision, PortfolioHistoryPoint, PortfolioSnapshot, Trade};
use crate::environment::Environment;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;
pub mod models;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Current portfolio summary.
    async fn portfolio(&self) -> Result<PortfolioSnapshot, ApiError>;

    /// Recent trades, most recent first.
    async fn trades(&self) -> Result<Vec<Trade>, ApiError>;

    /// Portfolio value over time, chronological.
    async fn portfolio_history(&self) -> Result<Vec<PortfolioHistoryPoint>, ApiError>;

    /// The agent's latest decision, if it has made one yet.
    async fn latest_decision(&self) -> Result<Option<Decision>, ApiError>;
}
