//! JSON payloads served by the trading bot backend.
//!
//! Each type is a read-only snapshot. The dashboard never mutates them, only
//! replaces a whole slot when a fresh copy arrives.

use serde::Deserialize;

/// Summary of the bot's portfolio.
///
/// Defaults to a zeroed snapshot before the first successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PortfolioSnapshot {
    pub balance: f64,
    pub pnl: f64,
    pub total_trades: u64,
    pub win_rate: f64,
}

/// A single executed trade, in whatever order the backend returns them
/// (most recent first).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trade {
    pub timestamp: String,
    /// Market identifier.
    pub ticker: String,
    /// May be absent in older log entries; rendered as "N/A".
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    /// Number of contracts.
    pub size: u32,
    /// Contract price in cents.
    pub price: u32,
    pub cost: f64,
}

/// One point of the portfolio value time series. Insertion order is the
/// chart's x-axis order.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PortfolioHistoryPoint {
    pub step: u64,
    pub value: f64,
}

/// The agent's most recent decision. The backend returns JSON `null` when no
/// decision has been made yet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Decision {
    pub action: String,
    pub size: u32,
}
